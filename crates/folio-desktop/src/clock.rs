//! Time sources
//!
//! The start menu schedules its content cleanup against a [`Clock`] so
//! tests can step time by hand instead of sleeping.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic millisecond time source
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> f64;
}

/// Wall clock of the host
///
/// Reads `Date.now()` in the browser and a process-local `Instant`
/// everywhere else.
#[derive(Clone, Debug)]
pub struct SystemClock {
    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    origin: std::time::Instant,
}

impl SystemClock {
    /// Create a clock
    pub fn new() -> Self {
        Self {
            #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock for deterministic tests
///
/// Clones share the same time, so a test can keep one handle while the
/// menu owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock at `t = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to an absolute time
    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    /// Move time forward
    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
