mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use sitenav_client::config::EmbeddedConfig;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "sitenav host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    tracing::info!(
        brand = %config.site.brand,
        entries = config.site.menu.len(),
        animated = config.site.animate_script.is_some(),
        "site config loaded"
    );

    let site = EmbeddedConfig::new(config.site).map_err(HostError::ConfigEncode)?;

    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let app = routes::app(conf.leptos_options, site);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "sitenav listening");
    axum::serve(listener, app).await?;
    Ok(())
}
