//! # sitenav-client
//!
//! Leptos + WASM responsive site navigation widget.
//!
//! Wide viewports get a horizontal menu with dropdown submenus; narrow
//! viewports get a toggle button that mounts a full-screen panel with
//! tap-to-expand entries. The crate renders on the server (`ssr`) and
//! hydrates in the browser (`hydrate`) from the same [`config::SiteConfig`].

pub mod app;
pub mod components;
pub mod config;
pub mod menu;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: restore the embedded site config and hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::read_embedded().unwrap_or_else(|| {
        log::warn!("embedded site config missing or invalid; hydrating with defaults");
        config::SiteConfig::default()
    });

    leptos::mount::hydrate_body(move || view! { <App config/> });
}
