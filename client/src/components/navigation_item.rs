//! One top-level desktop entry with an optional dropdown.
//!
//! DESIGN
//! ======
//! The dropdown is always rendered when the entry has children; only its
//! visibility class follows the disclosure state, so the overlay participates
//! in container animation when it appears. Pointer and focus gestures both
//! feed the same [`Disclosure`], keeping keyboard users on par with hover.

#[cfg(test)]
#[path = "navigation_item_test.rs"]
mod navigation_item_test;

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::components::nav_link::NavLink;
use crate::menu::NavEntry;
use crate::state::disclosure::{Disclosure, DisclosureTrigger};
use crate::util::auto_animate::use_auto_animate;

/// Desktop menu entry.
#[component]
pub fn NavigationItem(entry: NavEntry) -> impl IntoView {
    let dropdown = RwSignal::new(Disclosure::Closed);
    let container = use_auto_animate();
    let fire = move |trigger: DisclosureTrigger| dropdown.update(|d| *d = d.apply(trigger));

    let has_children = entry.has_children();
    let NavEntry { label, link, children } = entry;
    let indicator = move || indicator_glyph(has_children, dropdown.get()).map(|glyph| format!(" {glyph}"));

    let dropdown_links = children
        .into_iter()
        .map(|child| {
            view! {
                <NavLink href=child.link link_class="nav-item__dropdown-link">
                    {child.label}
                </NavLink>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class="nav-item"
            node_ref=container
            on:mouseenter=move |_| fire(DisclosureTrigger::PointerEnter)
            on:mouseleave=move |_| fire(DisclosureTrigger::PointerLeave)
            on:focusin=move |_| fire(DisclosureTrigger::FocusIn)
            on:focusout=move |_| fire(DisclosureTrigger::FocusOut)
            on:keydown=move |ev: KeyboardEvent| {
                if is_dismiss_key(&ev.key()) {
                    fire(DisclosureTrigger::Dismiss);
                }
            }
        >
            <NavLink
                href=link
                link_class="nav-item__link"
                expanded=has_children.then(|| Signal::from(dropdown))
            >
                <span>{label}{indicator}</span>
            </NavLink>
            {has_children
                .then(move || {
                    view! {
                        <div class=move || dropdown_class(dropdown.get())>{dropdown_links}</div>
                    }
                })}
        </div>
    }
}

/// Indicator appended to the label, or `None` for entries without a submenu.
pub fn indicator_glyph(has_children: bool, state: Disclosure) -> Option<&'static str> {
    has_children.then(|| state.glyph())
}

/// Class list of the dropdown overlay; the `--open` modifier makes it visible.
pub fn dropdown_class(state: Disclosure) -> &'static str {
    if state.is_open() {
        "nav-item__dropdown nav-item__dropdown--open"
    } else {
        "nav-item__dropdown"
    }
}

/// Keys that close an open dropdown or the mobile panel.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
