//! Start menu module
//!
//! Provides the menu content types and the open/close controller with
//! deferred content cleanup.

mod controller;
mod types;

pub use controller::{MenuSnapshot, StartMenu};
pub use types::{MenuItemKind, StartMenuData, StartMenuItem};
