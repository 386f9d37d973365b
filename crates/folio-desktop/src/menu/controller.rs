//! Start menu controller
//!
//! Closing the menu flips `is_open` immediately so the view can start its
//! exit transition, and keeps the content around until a cleanup fires
//! `close_delay_ms` later. Queries already report the content as gone once
//! the deadline passes; [`StartMenu::tick`], typically called from the
//! host's animation frame loop, is what actually drops it.
//!
//! Every open and close bumps a generation counter. A scheduled cleanup
//! remembers the generation it was created under and is discarded if the
//! counter moved on, so a re-open (or a second close) during the delay
//! never loses newer content.

use serde::Serialize;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::MENU_CLOSE_DELAY_MS;

use super::{StartMenuData, StartMenuItem};

/// Content cleanup waiting for its deadline
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingCleanup {
    generation: u64,
    due_at_ms: f64,
}

/// Start menu state
#[derive(Debug)]
pub struct StartMenu<C: Clock = SystemClock> {
    is_open: bool,
    menu_data: Option<StartMenuData>,
    generation: u64,
    pending: Option<PendingCleanup>,
    close_delay_ms: f64,
    clock: C,
}

/// Serializable view of the menu for the presentation layer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSnapshot {
    pub is_open: bool,
    pub menu_data: Option<StartMenuData>,
    pub active_app: Option<String>,
}

impl Default for StartMenu<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> StartMenu<C> {
    /// Create a closed, empty menu using the default close delay
    pub fn new(clock: C) -> Self {
        Self::with_delay(clock, MENU_CLOSE_DELAY_MS)
    }

    /// Create a closed, empty menu
    pub fn with_delay(clock: C, close_delay_ms: f64) -> Self {
        Self {
            is_open: false,
            menu_data: None,
            generation: 0,
            pending: None,
            close_delay_ms,
            clock,
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Show `data`, replacing whatever the menu displayed before
    pub fn open_menu(&mut self, data: StartMenuData) {
        debug!(app = %data.app, "opening start menu");
        self.generation += 1;
        self.menu_data = Some(data);
        self.is_open = true;
    }

    /// Close now and drop the content once the close delay has passed
    pub fn close_menu(&mut self) {
        self.generation += 1;
        self.is_open = false;
        self.pending = Some(PendingCleanup {
            generation: self.generation,
            due_at_ms: self.clock.now_ms() + self.close_delay_ms,
        });
        debug!(generation = self.generation, "closing start menu");
    }

    /// Close if `data` targets the app already showing, otherwise open it
    ///
    /// Without data the menu is closed.
    pub fn toggle_menu(&mut self, data: Option<StartMenuData>) {
        let requested = data.as_ref().map(|d| d.app.as_str());
        if self.is_open && self.active_app() == requested {
            self.close_menu();
        } else if let Some(data) = data {
            self.open_menu(data);
        } else {
            self.close_menu();
        }
    }

    /// Run the pending cleanup if its deadline has passed
    ///
    /// Returns true when content was dropped.
    pub fn tick(&mut self) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if self.clock.now_ms() < pending.due_at_ms {
            return false;
        }
        self.pending = None;

        if pending.generation != self.generation || self.is_open {
            debug!(
                scheduled = pending.generation,
                current = self.generation,
                "discarding stale start menu cleanup"
            );
            return false;
        }

        self.menu_data = None;
        debug!("start menu content cleared");
        true
    }

    /// True while a cleanup is waiting for its deadline
    pub fn has_pending_cleanup(&self) -> bool {
        self.pending.is_some()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether the overlay should be shown
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Content currently held, possibly while closing
    pub fn menu_data(&self) -> Option<&StartMenuData> {
        self.effective_data()
    }

    /// App whose menu is held; set exactly when `menu_data` is
    pub fn active_app(&self) -> Option<&str> {
        self.effective_data().map(|d| d.app.as_str())
    }

    /// True when content is held
    pub fn has_menu_data(&self) -> bool {
        self.effective_data().is_some()
    }

    /// Title of the held content, or an empty string
    pub fn current_title(&self) -> &str {
        self.effective_data().map_or("", |d| d.title.as_str())
    }

    /// Description of the held content, or an empty string
    pub fn current_description(&self) -> &str {
        self.effective_data()
            .and_then(|d| d.description.as_deref())
            .unwrap_or("")
    }

    /// Entries of the held content
    pub fn menu_items(&self) -> &[StartMenuItem] {
        self.effective_data()
            .map(|d| d.items.as_slice())
            .unwrap_or_default()
    }

    /// Owned copy of the state for rendering or serialization
    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            is_open: self.is_open,
            menu_data: self.effective_data().cloned(),
            active_app: self.active_app().map(str::to_string),
        }
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Held content as readers should see it
    ///
    /// A cleanup that is past due but not yet run by `tick` counts as
    /// applied.
    fn effective_data(&self) -> Option<&StartMenuData> {
        if self.cleanup_is_due() {
            None
        } else {
            self.menu_data.as_ref()
        }
    }

    fn cleanup_is_due(&self) -> bool {
        self.pending.is_some_and(|pending| {
            pending.generation == self.generation
                && !self.is_open
                && self.clock.now_ms() >= pending.due_at_ms
        })
    }
}
