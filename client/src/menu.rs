//! Navigation menu data model.
//!
//! DESIGN
//! ======
//! The menu is an immutable value handed to `NavigationBar` as a prop. Entries
//! carry no identity beyond their position. A present-but-empty `children`
//! list deserializes to the same value as an absent one, so every renderer
//! only has to ask [`NavEntry::has_children`].

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use serde::{Deserialize, Serialize};

/// Errors produced while loading a menu from JSON.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// The document is not valid JSON or does not match the menu schema.
    #[error("menu parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Serializing a configuration for embedding failed.
    #[error("config encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// A top-level entry has a blank label.
    #[error("menu entry {entry} has an empty label")]
    EmptyLabel { entry: usize },

    /// A top-level entry has a blank link.
    #[error("menu entry {entry} ({label:?}) has an empty link")]
    EmptyLink { entry: usize, label: String },

    /// A submenu child has a blank label.
    #[error("menu entry {entry} child {child} has an empty label")]
    EmptyChildLabel { entry: usize, child: usize },

    /// A submenu child has a blank link.
    #[error("menu entry {entry} child {child} ({label:?}) has an empty link")]
    EmptyChildLink { entry: usize, child: usize, label: String },
}

/// A leaf destination inside a submenu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavChild {
    pub label: String,
    pub link: String,
}

impl NavChild {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self { label: label.into(), link: link.into() }
    }
}

/// One top-level destination, optionally with a submenu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavChild>,
}

impl NavEntry {
    /// Entry without a submenu.
    pub fn leaf(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self { label: label.into(), link: link.into(), children: Vec::new() }
    }

    /// Entry with a submenu.
    pub fn group(label: impl Into<String>, link: impl Into<String>, children: Vec<NavChild>) -> Self {
        Self { label: label.into(), link: link.into(), children }
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Ordered, immutable list of top-level entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavMenu {
    entries: Vec<NavEntry>,
}

impl NavMenu {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }

    /// Parse and validate a JSON menu document.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Parse`] for malformed JSON and one of the
    /// `Empty*` variants when a label or link is blank.
    pub fn from_json(raw: &str) -> Result<Self, MenuError> {
        let menu: Self = serde_json::from_str(raw)?;
        menu.validate()?;
        Ok(menu)
    }

    /// Check that every label and link is non-blank.
    ///
    /// # Errors
    ///
    /// Returns the first blank field found, in document order.
    pub fn validate(&self) -> Result<(), MenuError> {
        for (entry, item) in self.entries.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(MenuError::EmptyLabel { entry });
            }
            if item.link.trim().is_empty() {
                return Err(MenuError::EmptyLink { entry, label: item.label.clone() });
            }
            for (child, sub) in item.children.iter().enumerate() {
                if sub.label.trim().is_empty() {
                    return Err(MenuError::EmptyChildLabel { entry, child });
                }
                if sub.link.trim().is_empty() {
                    return Err(MenuError::EmptyChildLink { entry, child, label: sub.label.clone() });
                }
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<NavEntry>> for NavMenu {
    fn from(entries: Vec<NavEntry>) -> Self {
        Self::new(entries)
    }
}

/// Built-in menu used when the host supplies none.
pub fn default_menu() -> NavMenu {
    NavMenu::new(vec![
        NavEntry::leaf("Overview", "/overview"),
        NavEntry::group(
            "Support",
            "#",
            vec![
                NavChild::new("Installation Manual", "/support/installation-manual"),
                NavChild::new("FAQ", "/support/faq"),
            ],
        ),
        NavEntry::group(
            "Company",
            "#",
            vec![
                NavChild::new("About Us", "/company/about-us"),
                NavChild::new("Contact Us", "/company/contact-us"),
                NavChild::new("Privacy Policy", "/company/privacy-policy"),
                NavChild::new("License Agreement", "/company/license-agreement"),
            ],
        ),
    ])
}
