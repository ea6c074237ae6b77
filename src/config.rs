//! Host configuration parsed from environment variables.

use std::path::Path;

use sitenav_client::config::{DEFAULT_BRAND, SiteConfig};
use sitenav_client::menu::{NavMenu, default_menu};

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub site: SiteConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SITENAV_MENU_PATH`: JSON menu file; built-in menu when absent
    /// - `SITENAV_BRAND`: brand text, default `Logo`
    /// - `SITENAV_ANIMATE_SCRIPT`: module script URL installing `window.autoAnimate`
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] for an unparsable port or an unreadable/invalid
    /// menu file.
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(non_empty_var("PORT").as_deref())?;
        let menu = match non_empty_var("SITENAV_MENU_PATH") {
            Some(path) => load_menu(Path::new(&path))?,
            None => default_menu(),
        };
        let brand = non_empty_var("SITENAV_BRAND").unwrap_or_else(|| DEFAULT_BRAND.to_owned());
        let animate_script = non_empty_var("SITENAV_ANIMATE_SCRIPT");

        Ok(Self { port, site: SiteConfig { brand, menu, animate_script } })
    }
}

/// Read and validate a JSON menu file.
///
/// # Errors
///
/// Returns [`HostError::MenuRead`] on I/O failure and
/// [`HostError::MenuInvalid`] when the document is not a valid menu.
pub fn load_menu(path: &Path) -> Result<NavMenu, HostError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| HostError::MenuRead { path: path.display().to_string(), source })?;
    NavMenu::from_json(&raw).map_err(|source| HostError::MenuInvalid { path: path.display().to_string(), source })
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}

/// Trimmed value of `key`, treating unset and blank the same.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
