use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use crate::types::{Props, WindowId};

/// A registry entry for one open content panel
///
/// Serializes with camelCase field names so the view layer can bind the
/// snapshot directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Unique key, stable for the window's lifetime
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Identifier of the content component rendered in the frame
    pub component: String,
    /// Opaque icon reference
    pub icon: Option<String>,
    /// Parameters forwarded to the component untouched
    pub props: Props,
    /// Top-left corner in pixels
    pub position: Vec2,
    /// Frame size in pixels
    pub size: Size,
    /// Hidden from view but still registered
    pub is_minimized: bool,
    /// Interpreted by the view layer; the registry only toggles it
    pub is_maximized: bool,
    /// Stacking order, higher renders on top
    pub z_index: u64,
}

impl Window {
    /// Whether the window is currently drawn
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }
}
