//! Full-viewport overlay listing the menu on narrow screens.
//!
//! ARCHITECTURE
//! ============
//! The panel holds no state of its own. `NavigationBar` mounts it while its
//! panel flag is open and unmounts it on close; every close gesture here
//! (close button, backdrop tap, Escape) just reports upward through
//! `on_close`.

#[cfg(test)]
#[path = "mobile_panel_test.rs"]
mod mobile_panel_test;

use leptos::prelude::*;

use crate::components::mobile_navigation_item::MobileNavigationItem;
use crate::components::navigation_item::is_dismiss_key;
use crate::menu::NavMenu;
use crate::util::auto_animate::use_auto_animate;

/// DOM id of the panel, referenced by the toggle's `aria-controls`.
pub const MOBILE_PANEL_ID: &str = "sitenav-mobile-panel";

pub const CLOSE_LABEL: &str = "Close";

/// Mobile navigation overlay.
///
/// Focus moves to the close button on mount, and Escape is heard on the
/// window while the panel is mounted, since focus may still sit on the
/// toggle outside the panel.
#[component]
pub fn MobilePanel(#[prop(into)] menu: NavMenu, on_close: Callback<()>) -> impl IntoView {
    let sheet = use_auto_animate();
    let close_button = NodeRef::<leptos::html::Button>::new();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            dismiss_on_key(&ev.key(), on_close);
        });
        on_cleanup(move || handle.remove());

        Effect::new(move || {
            if let Some(button) = close_button.get() {
                let _ = button.focus();
            }
        });
    }

    let rows = menu
        .entries()
        .iter()
        .cloned()
        .map(|entry| view! { <MobileNavigationItem entry/> })
        .collect::<Vec<_>>();

    view! {
        <div id=MOBILE_PANEL_ID class="mobile-panel" role="dialog" aria-modal="true" aria-label="Site navigation">
            <div class="mobile-panel__backdrop" aria-hidden="true" on:click=move |_| on_close.run(())></div>
            <div class="mobile-panel__sheet" node_ref=sheet>
                <button
                    type="button"
                    class="mobile-panel__close"
                    node_ref=close_button
                    on:click=move |_| on_close.run(())
                >
                    {CLOSE_LABEL}
                </button>
                <div class="mobile-panel__list">{rows}</div>
            </div>
        </div>
    }
}

/// Report a close request for dismiss keys. Returns whether `on_close` ran.
pub fn dismiss_on_key(key: &str, on_close: Callback<()>) -> bool {
    let dismiss = is_dismiss_key(key);
    if dismiss {
        on_close.run(());
    }
    dismiss
}
