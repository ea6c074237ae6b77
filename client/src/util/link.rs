//! Classification of menu link targets.
//!
//! In-app paths go through the router; fragments and external URLs are left
//! to the browser.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

/// How a menu `link` should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Client-side route such as `/support/faq`.
    Route,
    /// Same-page anchor such as `#` or `#pricing`.
    Fragment,
    /// Absolute URL, protocol-relative URL, or non-http scheme (`mailto:`).
    External,
}

impl LinkTarget {
    #[must_use]
    pub fn classify(link: &str) -> Self {
        let link = link.trim();
        if link.starts_with('#') {
            return Self::Fragment;
        }
        if link.starts_with("//") || has_scheme(link) {
            return Self::External;
        }
        Self::Route
    }
}

/// `true` when `link` begins with an RFC 3986 scheme followed by `:`.
fn has_scheme(link: &str) -> bool {
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
