//! Top-level responsive navigation shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both presentations live in the same markup: inline `NavigationItem`s are
//! hidden by the stylesheet below the desktop breakpoint, and the toggle
//! button is hidden above it. The mobile panel itself is mounted only while
//! the panel flag is open.

#[cfg(test)]
#[path = "navigation_bar_test.rs"]
mod navigation_bar_test;

use leptos::prelude::*;

use crate::components::mobile_panel::{CLOSE_LABEL, MOBILE_PANEL_ID, MobilePanel};
use crate::components::navigation_item::NavigationItem;
use crate::config::DEFAULT_BRAND;
use crate::menu::NavMenu;
use crate::state::disclosure::{Disclosure, DisclosureTrigger};
use crate::util::auto_animate::use_auto_animate;

pub const MENU_LABEL: &str = "Menu";

/// Navigation bar for `menu`, with `brand` shown before the inline items.
#[component]
pub fn NavigationBar(#[prop(into)] menu: NavMenu, #[prop(optional, into)] brand: Option<String>) -> impl IntoView {
    let panel = RwSignal::new(Disclosure::Closed);
    let container = use_auto_animate();
    let brand = brand.unwrap_or_else(|| DEFAULT_BRAND.to_owned());

    let on_toggle = move |_| panel.update(|p| *p = p.apply(DisclosureTrigger::Activate));
    let on_close = Callback::new(move |()| panel.update(|p| *p = p.apply(DisclosureTrigger::Dismiss)));

    let items = menu
        .entries()
        .iter()
        .cloned()
        .map(|entry| view! { <NavigationItem entry/> })
        .collect::<Vec<_>>();

    view! {
        <nav class="sitenav" aria-label="Main">
            <div class="sitenav__inner" node_ref=container>
                <div class="sitenav__start">
                    <span class="sitenav__brand">{brand}</span>
                    <div class="sitenav__items">{items}</div>
                </div>
                <button
                    type="button"
                    class="sitenav__toggle"
                    aria-controls=move || panel.get().is_open().then_some(MOBILE_PANEL_ID)
                    aria-expanded=move || panel.get().aria_expanded()
                    on:click=on_toggle
                >
                    {move || toggle_label(panel.get())}
                </button>
                <Show when=move || panel.get().is_open()>
                    <MobilePanel menu=menu.clone() on_close/>
                </Show>
            </div>
        </nav>
    }
}

/// Text of the mobile toggle button.
pub fn toggle_label(panel: Disclosure) -> &'static str {
    if panel.is_open() { CLOSE_LABEL } else { MENU_LABEL }
}
