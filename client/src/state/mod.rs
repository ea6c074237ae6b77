//! Component-local view state.
//!
//! DESIGN
//! ======
//! Every open/closed flag in the widget is a [`disclosure::Disclosure`] held
//! in the owning component's own signal. Nothing here is provided through
//! context; sibling instances never share state.

pub mod disclosure;
