//! Page modules for route-level screens.
//!
//! The widget does not own any content; the single page here gives every
//! menu destination something to resolve to when the app runs standalone.

pub mod content;
