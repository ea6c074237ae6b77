//! Site configuration shared by server rendering and browser hydration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host resolves a [`SiteConfig`] once at startup. The SSR shell embeds it
//! as a JSON `<script>` element so the hydrating WASM bundle renders exactly
//! the same menu without a second fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::menu::{MenuError, NavMenu, default_menu};

/// DOM id of the embedded configuration element.
pub const CONFIG_ELEMENT_ID: &str = "sitenav-config";

pub const DEFAULT_BRAND: &str = "Logo";

/// Everything the widget needs from its host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub menu: NavMenu,
    /// Module script that installs `window.autoAnimate`; no animation when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate_script: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { brand: DEFAULT_BRAND.to_owned(), menu: default_menu(), animate_script: None }
    }
}

impl SiteConfig {
    /// Serialize for embedding inside a `<script type="application/json">`.
    ///
    /// `<` is escaped so labels containing `</script>` cannot terminate the
    /// element early.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Encode`] if serialization fails.
    pub fn to_embedded_json(&self) -> Result<String, MenuError> {
        let raw = serde_json::to_string(self).map_err(MenuError::Encode)?;
        Ok(raw.replace('<', "\\u003c"))
    }

    /// Parse an embedded document and validate its menu.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError`] if the JSON is malformed or the menu is invalid.
    pub fn from_embedded_json(raw: &str) -> Result<Self, MenuError> {
        let config: Self = serde_json::from_str(raw)?;
        config.menu.validate()?;
        Ok(config)
    }
}

/// A [`SiteConfig`] together with its encoded `<script>` payload.
///
/// Encoding happens once, when the host starts, so every rendered page embeds
/// the same document.
#[derive(Clone, Debug)]
pub struct EmbeddedConfig {
    config: SiteConfig,
    json: Arc<str>,
}

impl EmbeddedConfig {
    /// # Errors
    ///
    /// Returns [`MenuError::Encode`] if `config` cannot be serialized.
    pub fn new(config: SiteConfig) -> Result<Self, MenuError> {
        let json = config.to_embedded_json()?.into();
        Ok(Self { config, json })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn json(&self) -> &str {
        &self.json
    }
}

/// Read the configuration embedded by the SSR shell.
pub fn read_embedded() -> Option<SiteConfig> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window().and_then(|w| w.document())?;
        let raw = document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
        match SiteConfig::from_embedded_json(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("embedded site config rejected: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
