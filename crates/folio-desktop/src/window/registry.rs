//! Window registry
//!
//! Owns every open window, the active-window pointer and the z-index
//! counter. All operations are total: targeting an id that is not
//! registered leaves the registry untouched.
//!
//! Any operation that changes an existing window's geometry or visibility
//! through user interaction (open again, maximize, move, resize) also
//! focuses it, so the most recently touched window is always on top.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::DesktopConfig;
use crate::math::{Size, Vec2, Viewport};
use crate::types::{Props, WindowId};

use super::Window;

/// Registry of open windows
#[derive(Clone, Debug)]
pub struct WindowRegistry {
    /// Windows in insertion order
    windows: Vec<Window>,
    /// Window with interaction focus
    active: Option<WindowId>,
    /// Next z-index to hand out; never decreases
    next_z: u64,
    /// Last viewport reported by the view layer
    viewport: Viewport,
    config: DesktopConfig,
}

/// Serializable view of the registry for the presentation layer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    pub windows: Vec<Window>,
    pub active_window_id: Option<WindowId>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(DesktopConfig::default())
    }

    /// Create an empty registry
    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            next_z: u64::from(config.initial_z_index),
            viewport: config.initial_viewport,
            config,
        }
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Record the current browser viewport
    ///
    /// Only consulted by later `open` calls; windows that are already open
    /// are not rearranged or minimized.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    /// Last recorded viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether single-window mode applies at the current viewport
    pub fn is_single_window_mode(&self) -> bool {
        self.viewport.is_narrow(self.config.mobile_breakpoint)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Open a window, or bring back the one already registered under `id`
    ///
    /// On a narrow viewport every other window is minimized first. An
    /// existing window is restored if minimized and focused; no duplicate
    /// is created. A new window gets the default size, a cascaded centered
    /// position and becomes active.
    pub fn open(
        &mut self,
        id: impl Into<WindowId>,
        title: impl Into<String>,
        component: impl Into<String>,
        props: Props,
        icon: Option<String>,
    ) {
        let id = id.into();

        if self.is_single_window_mode() {
            for window in self.windows.iter_mut().filter(|w| w.id != id) {
                window.is_minimized = true;
            }
        }

        if let Some(window) = self.get_mut(&id) {
            window.is_minimized = false;
            debug!(id = %id, "reopening existing window");
            self.focus(&id);
            return;
        }

        let size = self.config.default_window_size;
        let position = self.cascade_position(size);
        let z_index = self.take_z();

        debug!(
            id = %id,
            x = position.x,
            y = position.y,
            z_index,
            "opening window"
        );

        self.windows.push(Window {
            id: id.clone(),
            title: title.into(),
            component: component.into(),
            icon,
            props,
            position,
            size,
            is_minimized: false,
            is_maximized: false,
            z_index,
        });
        self.active = Some(id);
    }

    /// Close a window
    ///
    /// If it was active, focus passes to the survivor with the highest
    /// z-index, or to nothing when the registry is empty.
    pub fn close(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.windows.remove(index);
        debug!(id, remaining = self.windows.len(), "closed window");

        if self.active.as_deref() == Some(id) {
            self.active = self.top_window().map(|w| w.id.clone());
            debug!(active = ?self.active, "focus moved after close");
        }
    }

    /// Bring a window to the front and make it active
    pub fn focus(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let z_index = self.take_z();
        let window = &mut self.windows[index];
        window.z_index = z_index;
        self.active = Some(window.id.clone());
    }

    /// Hide a window without closing it
    ///
    /// Focus is cleared if it was on this window but not handed to another.
    pub fn minimize(&mut self, id: &str) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.is_minimized = true;
        debug!(id, "minimized window");

        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }

    /// Toggle the maximized flag and focus the window
    pub fn maximize(&mut self, id: &str) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.is_maximized = !window.is_maximized;
        debug!(id, maximized = window.is_maximized, "toggled maximize");
        self.focus(id);
    }

    /// Replace a window's position and focus it
    pub fn move_window(&mut self, id: &str, x: f64, y: f64) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.position = Vec2::new(x, y);
        trace!(id, x, y, "moved window");
        self.focus(id);
    }

    /// Replace a window's size and focus it
    pub fn resize(&mut self, id: &str, width: f64, height: f64) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.size = Size::new(width, height);
        trace!(id, width, height, "resized window");
        self.focus(id);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All windows in the order they were opened
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Look up a window by id
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Number of registered windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when no window is open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Id of the window with interaction focus
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The window with interaction focus
    pub fn active_window(&self) -> Option<&Window> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    /// The window with the highest z-index, minimized or not
    pub fn top_window(&self) -> Option<&Window> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    /// Windows sorted back to front
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut sorted: Vec<&Window> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.z_index);
        sorted
    }

    /// Windows that are not minimized, in insertion order
    pub fn visible_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    /// Owned copy of the state for rendering or serialization
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            windows: self.windows.clone(),
            active_window_id: self.active.clone(),
        }
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Post-increment the z counter
    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Center in the viewport, shifted by one cascade step per open window
    fn cascade_position(&self, size: Size) -> Vec2 {
        let step = self.config.cascade_step * self.windows.len() as f64;
        let margin = self.config.min_window_margin;
        let origin = self.viewport.centered_origin(size) + Vec2::new(step, step);
        origin.max(Vec2::new(margin, margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(registry: &mut WindowRegistry, id: &str) {
        registry.open(id, id.to_uppercase(), "default", Props::new(), None);
    }

    #[test]
    fn test_open_creates_window_with_defaults() {
        let mut registry = WindowRegistry::new();
        registry.set_viewport(1920.0, 1080.0);

        registry.open(
            "about",
            "About",
            "AboutApp",
            Props::new(),
            Some("computer".to_string()),
        );

        let window = registry.get("about").unwrap();
        assert_eq!(window.title, "About");
        assert_eq!(window.component, "AboutApp");
        assert_eq!(window.icon.as_deref(), Some("computer"));
        assert_eq!(window.size, Size::new(900.0, 600.0));
        assert_eq!(window.position, Vec2::new(510.0, 240.0));
        assert_eq!(window.z_index, 100);
        assert!(!window.is_minimized);
        assert!(!window.is_maximized);
        assert_eq!(registry.active_id(), Some("about"));
    }

    #[test]
    fn test_open_cascades_positions() {
        let mut registry = WindowRegistry::new();
        registry.set_viewport(1920.0, 1080.0);

        open(&mut registry, "a");
        open(&mut registry, "b");
        open(&mut registry, "c");

        assert_eq!(registry.get("b").unwrap().position, Vec2::new(530.0, 260.0));
        assert_eq!(registry.get("c").unwrap().position, Vec2::new(550.0, 280.0));
    }

    #[test]
    fn test_open_clamps_to_margin() {
        let mut registry = WindowRegistry::new();
        registry.set_viewport(800.0, 500.0);

        open(&mut registry, "a");

        // (800 - 900) / 2 = -50 and (500 - 600) / 2 = -50, both clamp to 20
        assert_eq!(registry.get("a").unwrap().position, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_open_passes_props_through() {
        let mut registry = WindowRegistry::new();
        let mut props = Props::new();
        props.insert("section".to_string(), serde_json::json!("skills"));
        props.insert("page".to_string(), serde_json::json!(2));

        registry.open("about", "About", "AboutApp", props.clone(), None);

        assert_eq!(registry.get("about").unwrap().props, props);
    }

    #[test]
    fn test_reopen_focuses_without_duplicate() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");

        open(&mut registry, "a");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active_id(), Some("a"));
        assert!(registry.get("a").unwrap().z_index > registry.get("b").unwrap().z_index);
    }

    #[test]
    fn test_reopen_keeps_original_title_and_geometry() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        registry.move_window("a", 5.0, 6.0);

        registry.open("a", "Other", "Other", Props::new(), None);

        let window = registry.get("a").unwrap();
        assert_eq!(window.title, "A");
        assert_eq!(window.component, "default");
        assert_eq!(window.position, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_reopen_restores_minimized() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        registry.minimize("a");

        open(&mut registry, "a");

        assert!(!registry.get("a").unwrap().is_minimized);
        assert_eq!(registry.active_id(), Some("a"));
    }

    #[test]
    fn test_close_active_focuses_top_survivor() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        open(&mut registry, "c");
        registry.focus("a");
        registry.focus("c");

        registry.close("c");

        // "a" was bumped after "b" was created
        assert_eq!(registry.active_id(), Some("a"));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");

        registry.close("a");

        assert_eq!(registry.active_id(), Some("b"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_close_last_window_clears_active() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");

        registry.close("a");

        assert!(registry.is_empty());
        assert_eq!(registry.active_id(), None);
    }

    #[test]
    fn test_close_may_focus_minimized_window() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        registry.minimize("a");
        registry.focus("b");

        registry.close("b");

        // Selection is by z-index alone
        assert_eq!(registry.active_id(), Some("a"));
        assert!(registry.get("a").unwrap().is_minimized);
    }

    #[test]
    fn test_minimize_active_clears_focus() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");

        registry.minimize("b");

        assert!(registry.get("b").unwrap().is_minimized);
        assert_eq!(registry.active_id(), None);
    }

    #[test]
    fn test_minimize_inactive_keeps_focus() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");

        registry.minimize("a");

        assert_eq!(registry.active_id(), Some("b"));
    }

    #[test]
    fn test_maximize_toggles_and_focuses() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");

        registry.maximize("a");
        assert!(registry.get("a").unwrap().is_maximized);
        assert_eq!(registry.active_id(), Some("a"));

        registry.maximize("a");
        assert!(!registry.get("a").unwrap().is_maximized);
    }

    #[test]
    fn test_maximize_does_not_restore_minimized() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        registry.minimize("a");

        registry.maximize("a");

        let window = registry.get("a").unwrap();
        assert!(window.is_minimized);
        assert!(window.is_maximized);
        assert_eq!(registry.active_id(), Some("a"));
    }

    #[test]
    fn test_move_and_resize_replace_geometry() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");

        registry.move_window("a", -40.0, 12.5);
        assert_eq!(registry.get("a").unwrap().position, Vec2::new(-40.0, 12.5));
        assert_eq!(registry.active_id(), Some("a"));

        registry.resize("b", 320.0, 240.0);
        assert_eq!(registry.get("b").unwrap().size, Size::new(320.0, 240.0));
        assert_eq!(registry.active_id(), Some("b"));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        let before = registry.snapshot();

        registry.close("missing");
        registry.focus("missing");
        registry.minimize("missing");
        registry.maximize("missing");
        registry.move_window("missing", 1.0, 1.0);
        registry.resize("missing", 1.0, 1.0);

        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn test_single_window_mode_minimizes_others() {
        let mut registry = WindowRegistry::new();
        registry.set_viewport(375.0, 667.0);

        open(&mut registry, "a");
        open(&mut registry, "b");

        assert!(registry.get("a").unwrap().is_minimized);
        assert!(!registry.get("b").unwrap().is_minimized);
        assert_eq!(registry.active_id(), Some("b"));
    }

    #[test]
    fn test_single_window_mode_on_reopen() {
        let mut registry = WindowRegistry::new();
        registry.set_viewport(375.0, 667.0);
        open(&mut registry, "a");
        open(&mut registry, "b");

        open(&mut registry, "a");

        assert!(!registry.get("a").unwrap().is_minimized);
        assert!(registry.get("b").unwrap().is_minimized);
        assert_eq!(registry.visible_windows().count(), 1);
    }

    #[test]
    fn test_shrinking_viewport_does_not_minimize_existing() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");

        registry.set_viewport(375.0, 667.0);

        assert_eq!(registry.visible_windows().count(), 2);
    }

    #[test]
    fn test_windows_keep_insertion_order() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        open(&mut registry, "c");
        registry.focus("a");

        let ids: Vec<&str> = registry.windows().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        let by_z: Vec<&str> = registry.windows_by_z().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(by_z, ["b", "c", "a"]);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");

        let json = serde_json::to_value(registry.snapshot()).unwrap();

        assert_eq!(json["activeWindowId"], "a");
        assert_eq!(json["windows"][0]["isMinimized"], false);
        assert_eq!(json["windows"][0]["zIndex"], 100);
        assert_eq!(json["windows"][0]["size"]["width"], 900.0);
    }

    #[test]
    fn test_fractional_geometry_survives_snapshot() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");

        registry.move_window("a", 123.456, 0.1);
        registry.resize("a", 640.25, 480.3);

        let json = serde_json::to_value(registry.snapshot()).unwrap();
        let window = &json["windows"][0];
        assert_eq!(window["position"]["x"].as_f64(), Some(123.456));
        assert_eq!(window["position"]["y"].as_f64(), Some(0.1));
        assert_eq!(window["size"]["width"].as_f64(), Some(640.25));
        assert_eq!(window["size"]["height"].as_f64(), Some(480.3));
    }

    #[test]
    fn test_set_viewport_is_recorded() {
        let mut registry = WindowRegistry::new();
        assert_eq!(registry.viewport(), Viewport::new(1920.0, 1080.0));

        registry.set_viewport(1366.5, 768.0);

        assert_eq!(registry.viewport(), Viewport::new(1366.5, 768.0));
        assert!(!registry.is_single_window_mode());
    }
}
