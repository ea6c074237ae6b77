//! Utility helpers shared across navigation components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (animation hook, link
//! classification) from component rendering logic.

pub mod auto_animate;
pub mod link;
