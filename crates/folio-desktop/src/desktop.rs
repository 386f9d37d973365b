//! Desktop facade
//!
//! Owns one window registry and one start menu and performs the wiring
//! the view layer needs between them: launching an app from the catalog
//! closes the menu, taskbar buttons toggle per-app menus.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Desktop                    │
//! │  ┌────────────────┐   ┌──────────────────┐   │
//! │  │ WindowRegistry │   │    StartMenu     │   │
//! │  │ (windows, z)   │   │ (open, content)  │   │
//! │  └────────────────┘   └──────────────────┘   │
//! │            ▲ catalog lookups ▲               │
//! └──────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::catalog::{find_app, find_mobile_menu, Localizer, START_MENU};
use crate::clock::{Clock, SystemClock};
use crate::config::DesktopConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::menu::{MenuSnapshot, StartMenu, StartMenuData};
use crate::types::Props;
use crate::window::{RegistrySnapshot, WindowRegistry};

/// Window registry and start menu for one page
#[derive(Debug)]
pub struct Desktop<C: Clock = SystemClock> {
    /// Window registry
    pub windows: WindowRegistry,
    /// Start menu controller
    pub menu: StartMenu<C>,
}

/// Everything the presentation layer renders, in one value
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopSnapshot {
    pub windows: RegistrySnapshot,
    pub menu: MenuSnapshot,
}

impl Default for Desktop<SystemClock> {
    fn default() -> Self {
        Self::new(DesktopConfig::default(), SystemClock::new())
    }
}

impl<C: Clock> Desktop<C> {
    /// Create an empty desktop
    pub fn new(config: DesktopConfig, clock: C) -> Self {
        Self {
            windows: WindowRegistry::with_config(config),
            menu: StartMenu::with_delay(clock, config.menu_close_delay_ms),
        }
    }

    /// Record the browser viewport after a resize
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        debug!(width, height, "viewport changed");
        self.windows.set_viewport(width, height);
    }

    /// Open (or bring back) the window of a catalogued app and close the menu
    pub fn launch_app(&mut self, app_id: &str, localizer: &impl Localizer) -> DesktopResult<()> {
        let app = find_app(app_id).ok_or_else(|| DesktopError::UnknownApp(app_id.to_string()))?;

        self.windows.open(
            app.id,
            app.title(localizer),
            app.component,
            Props::new(),
            Some(app.icon.id().to_string()),
        );
        if self.menu.is_open() {
            self.menu.close_menu();
        }
        Ok(())
    }

    /// Toggle the per-app menu shown from the taskbar on small screens
    pub fn toggle_app_menu(&mut self, app_id: &str, localizer: &impl Localizer) -> DesktopResult<()> {
        let menu = find_mobile_menu(app_id)
            .ok_or_else(|| DesktopError::UnknownApp(app_id.to_string()))?;
        self.menu.toggle_menu(Some(menu.resolve(localizer)));
        Ok(())
    }

    /// Localized start menu listing every catalogued app
    pub fn start_menu(&self, localizer: &impl Localizer) -> StartMenuData {
        START_MENU.resolve(localizer)
    }

    /// Toggle the start menu from the taskbar's start button
    pub fn toggle_start_menu(&mut self, localizer: &impl Localizer) {
        let data = self.start_menu(localizer);
        self.menu.toggle_menu(Some(data));
    }

    /// Advance deferred work; returns true when the menu dropped its content
    pub fn tick(&mut self) -> bool {
        self.menu.tick()
    }

    /// Owned copy of both containers
    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot {
            windows: self.windows.snapshot(),
            menu: self.menu.snapshot(),
        }
    }
}
