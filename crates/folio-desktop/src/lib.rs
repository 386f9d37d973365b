//! Desktop State Core for Folio
//!
//! This crate provides the state behind the portfolio "desktop":
//! - Window registry (open, close, focus, minimize, maximize, z-order)
//! - Start menu controller (open/close with deferred content cleanup)
//! - Static app catalog (apps, start menu entries, mobile menus)
//! - A `Desktop` facade wiring the two containers for the view layer
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Viewport`)
//! - [`window`]: Window records and the [`WindowRegistry`]
//! - [`menu`]: Start menu data and the [`StartMenu`] controller
//! - [`catalog`]: App and menu tables resolved through a [`Localizer`]
//! - [`clock`]: Injectable time sources
//! - [`config`]: Tunable constants loaded from JSON
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{Props, WindowRegistry};
//!
//! let mut registry = WindowRegistry::new();
//! registry.set_viewport(1280.0, 800.0);
//!
//! registry.open("about", "About", "AboutApp", Props::new(), None);
//! registry.open("projects", "Projects", "ProjectsApp", Props::new(), None);
//! registry.close("projects");
//!
//! assert_eq!(registry.active_id(), Some("about"));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Deferred cleanup reads an injectable [`Clock`]
//! 3. **Total Operations**: Unknown ids and redundant calls are silent no-ops
//! 4. **Minimal Dependencies**: Browser bindings live behind the `wasm` feature

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod math;
pub mod menu;
pub mod window;

mod desktop;
#[cfg_attr(not(feature = "wasm"), allow(dead_code))]
mod json;
mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use catalog::{
    AppConfig, AppIcon, KeyLocalizer, Localizer, MenuConfig, MenuItemConfig, START_MENU,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::DesktopConfig;
pub use desktop::{Desktop, DesktopSnapshot};
pub use error::{DesktopError, DesktopResult};
pub use math::{Size, Vec2, Viewport};
pub use menu::{MenuItemKind, MenuSnapshot, StartMenu, StartMenuData, StartMenuItem};
pub use types::{Props, WindowId};
pub use window::{RegistrySnapshot, Window, WindowRegistry};

/// Viewport width (px) below which only one window stays visible
pub use config::MOBILE_BREAKPOINT;

/// Delay before a closed start menu drops its content, in milliseconds
pub use config::MENU_CLOSE_DELAY_MS;
