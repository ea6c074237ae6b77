//! Anchor that routes in-app paths through `leptos_router`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::disclosure::Disclosure;
use crate::util::link::LinkTarget;

/// Navigable link for a menu destination.
///
/// `expanded` marks the link as the trigger of a submenu and mirrors its
/// state into `aria-expanded`.
#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(into)] link_class: String,
    #[prop(default = None)] expanded: Option<Signal<Disclosure>>,
    children: Children,
) -> impl IntoView {
    let aria_expanded = move || expanded.map(|state| state.get().aria_expanded());
    let aria_haspopup = expanded.map(|_| "true");

    match LinkTarget::classify(&href) {
        LinkTarget::Route => view! {
            <A
                href=href
                attr:class=link_class
                attr:aria-expanded=aria_expanded
                attr:aria-haspopup=aria_haspopup
            >
                {children()}
            </A>
        }
        .into_any(),
        LinkTarget::Fragment => view! {
            <a href=href class=link_class aria-expanded=aria_expanded aria-haspopup=aria_haspopup>
                {children()}
            </a>
        }
        .into_any(),
        LinkTarget::External => view! {
            <a
                href=href
                class=link_class
                rel="noopener noreferrer"
                aria-expanded=aria_expanded
                aria-haspopup=aria_haspopup
            >
                {children()}
            </a>
        }
        .into_any(),
    }
}
