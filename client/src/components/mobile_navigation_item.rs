//! One entry inside the mobile panel with tap-to-expand children.
//!
//! Rows with children are buttons that toggle an inline sublist instead of
//! navigating. Rows without children render a plain, non-navigable label;
//! the entry's own `link` is never followed from the mobile panel.

#[cfg(test)]
#[path = "mobile_navigation_item_test.rs"]
mod mobile_navigation_item_test;

use leptos::prelude::*;

use crate::components::nav_link::NavLink;
use crate::menu::{NavChild, NavEntry};
use crate::state::disclosure::{Disclosure, DisclosureTrigger};
use crate::util::auto_animate::use_auto_animate;

/// Presentation of a mobile row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MobileRow {
    /// Tapping toggles the child list.
    Expandable,
    /// Static label with no affordance.
    Label,
}

impl MobileRow {
    pub fn for_entry(entry: &NavEntry) -> Self {
        if entry.has_children() { Self::Expandable } else { Self::Label }
    }
}

/// Mobile menu entry.
#[component]
pub fn MobileNavigationItem(entry: NavEntry) -> impl IntoView {
    let expanded = RwSignal::new(Disclosure::Closed);
    let container = use_auto_animate();
    let row = MobileRow::for_entry(&entry);
    let NavEntry { label, children, .. } = entry;

    let on_tap = move |_| expanded.update(|e| *e = e.apply(DisclosureTrigger::Activate));

    let row_view = match row {
        MobileRow::Expandable => view! {
            <button
                type="button"
                class="mobile-item__row"
                aria-expanded=move || expanded.get().aria_expanded()
                on:click=on_tap
            >
                {label}
                " "
                {move || expanded.get().glyph()}
            </button>
        }
        .into_any(),
        MobileRow::Label => view! { <div class="mobile-item__row mobile-item__row--inert">{label}</div> }.into_any(),
    };

    let sublist = move || {
        let visible = visible_children(&children, expanded.get());
        (!visible.is_empty()).then(|| {
            let links = visible
                .iter()
                .cloned()
                .map(|child| {
                    view! {
                        <NavLink href=child.link link_class="mobile-item__child">
                            {child.label}
                        </NavLink>
                    }
                })
                .collect::<Vec<_>>();
            view! { <div class="mobile-item__children">{links}</div> }
        })
    };

    view! {
        <div class="mobile-item" node_ref=container>
            {row_view}
            {sublist}
        </div>
    }
}

/// Children shown under the row: all of them when expanded, none otherwise.
pub fn visible_children(children: &[NavChild], state: Disclosure) -> &[NavChild] {
    if state.is_open() { children } else { &[] }
}
