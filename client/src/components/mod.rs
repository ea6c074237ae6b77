//! Navigation widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NavigationBar` is the only entry point hosts need; it composes the desktop
//! `NavigationItem`s and, on demand, the `MobilePanel` with its
//! `MobileNavigationItem` rows. State flows down as props and up only through
//! the panel's close callback.

pub mod mobile_navigation_item;
pub mod mobile_panel;
pub mod nav_link;
pub mod navigation_bar;
pub mod navigation_item;

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod ssr_render;
