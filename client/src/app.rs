//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation_bar::NavigationBar;
use crate::config::{CONFIG_ELEMENT_ID, EmbeddedConfig, SiteConfig};
use crate::pages::content::ContentPage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Embeds the encoded config so [`crate::hydrate`] restores the same menu, and
/// loads the optional animation script before the WASM bundle.
pub fn shell(options: LeptosOptions, site: EmbeddedConfig) -> impl IntoView {
    let embedded = site.json().to_owned();
    let config = site.config().clone();
    let animate_script = config.animate_script.clone().map(|src| view! { <script type="module" src=src></script> });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=embedded></script>
                {animate_script}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component: navigation bar above the routed content.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let SiteConfig { brand, menu, .. } = config;

    view! {
        <Stylesheet id="leptos" href="/pkg/sitenav.css"/>
        <Title text=brand.clone()/>

        <Router>
            <NavigationBar menu brand/>
            <main class="sitenav-page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ContentPage/>
                    <Route path=WildcardSegment("path") view=ContentPage/>
                </Routes>
            </main>
        </Router>
    }
}
