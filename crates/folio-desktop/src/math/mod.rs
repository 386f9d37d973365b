//! Geometry types for the desktop
//!
//! Positions and sizes are in CSS pixels, matching what the view layer
//! applies to window frames.

mod size;
mod vec2;
mod viewport;

pub use size::Size;
pub use vec2::Vec2;
pub use viewport::Viewport;
