use serde::{Deserialize, Serialize};

use super::{Size, Vec2};

/// Browser viewport as last reported by the view layer
///
/// The registry samples this at each `open` to compute the cascade
/// position and to decide whether single-window mode applies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Inner size of the browser window in pixels
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a viewport of the given inner size
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    /// True when the width is below `breakpoint`
    ///
    /// Mirrors the `(max-width: breakpoint - 1px)` media query the
    /// view layer uses for its mobile layout.
    pub fn is_narrow(&self, breakpoint: f64) -> bool {
        self.size.width < breakpoint
    }

    /// Top-left corner that centers a frame of `frame` size
    pub fn centered_origin(&self, frame: Size) -> Vec2 {
        (self.size.as_vec2() - frame.as_vec2()) * 0.5
    }
}
