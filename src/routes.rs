//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the small JSON API with Leptos SSR rendering under a single Axum
//! router. Every page path renders the navigation app; compiled WASM/CSS
//! assets are served from the Leptos site root under `/pkg`.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use sitenav_client::app::{App, shell};
use sitenav_client::config::{EmbeddedConfig, SiteConfig};
use sitenav_client::menu::NavMenu;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// JSON endpoints that expose the active configuration.
fn api_routes(site: Arc<SiteConfig>) -> Router {
    Router::new()
        .route("/api/menu", get(menu))
        .route("/healthz", get(healthz))
        .with_state(site)
}

/// Full application router: API + Leptos SSR + static assets.
pub fn app(leptos_options: LeptosOptions, site: EmbeddedConfig) -> Router {
    let routes = generate_route_list({
        let config = site.config().clone();
        move || view! { <App config=config.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let site = site.clone();
            move || shell(opts.clone(), site.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes(Arc::new(site.config().clone()))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn menu(State(site): State<Arc<SiteConfig>>) -> Json<NavMenu> {
    Json(site.menu.clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
