//! WASM bindings for the desktop state core
//!
//! Exposes [`DesktopController`] to the page. Structured values cross the
//! boundary as JSON strings: props and menu data come in as JSON, the
//! state snapshot goes out as JSON.

use wasm_bindgen::prelude::*;

use crate::catalog::{KeyLocalizer, Localizer};
use crate::clock::SystemClock;
use crate::desktop::Desktop;
use crate::error::DesktopError;
use crate::json::{parse_config, parse_menu_data, parse_props, to_json};

/// Log to the browser console
pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Translates keys through a JS callback `(key) => string`
struct JsLocalizer<'a>(&'a js_sys::Function);

impl Localizer for JsLocalizer<'_> {
    fn translate(&self, key: &str) -> String {
        self.0
            .call1(&JsValue::NULL, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_else(|| key.to_string())
    }
}

/// Desktop state owned by the page
#[wasm_bindgen]
pub struct DesktopController {
    desktop: Desktop<SystemClock>,
    translator: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller, optionally overriding defaults with a JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<DesktopController, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = parse_config(config_json.as_deref()).map_err(to_js)?;

        log(&format!(
            "[desktop] Initialized (breakpoint={}px, menu delay={}ms)",
            config.mobile_breakpoint, config.menu_close_delay_ms
        ));

        Ok(DesktopController {
            desktop: Desktop::new(config, SystemClock::new()),
            translator: None,
        })
    }

    /// Install the `(key) => string` callback used for catalog titles
    #[wasm_bindgen]
    pub fn set_translator(&mut self, translate: js_sys::Function) {
        self.translator = Some(translate);
    }

    /// Report the browser's inner size
    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.desktop.set_viewport(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    #[wasm_bindgen]
    pub fn open_window(
        &mut self,
        id: String,
        title: String,
        component: Option<String>,
        props_json: Option<String>,
        icon: Option<String>,
    ) -> Result<(), JsValue> {
        let props = parse_props(props_json.as_deref()).map_err(to_js)?;
        let component = component.unwrap_or_else(|| "default".to_string());
        self.desktop.windows.open(id, title, component, props, icon);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.desktop.windows.close(id);
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.desktop.windows.focus(id);
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) {
        self.desktop.windows.minimize(id);
    }

    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: &str) {
        self.desktop.windows.maximize(id);
    }

    #[wasm_bindgen]
    pub fn move_window(&mut self, id: &str, x: f64, y: f64) {
        self.desktop.windows.move_window(id, x, y);
    }

    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: &str, width: f64, height: f64) {
        self.desktop.windows.resize(id, width, height);
    }

    /// Open the window of a catalogued app
    #[wasm_bindgen]
    pub fn launch_app(&mut self, app_id: &str) -> Result<(), JsValue> {
        let result = match &self.translator {
            Some(f) => self.desktop.launch_app(app_id, &JsLocalizer(f)),
            None => self.desktop.launch_app(app_id, &KeyLocalizer),
        };
        result.map_err(to_js)
    }

    // =========================================================================
    // Start menu
    // =========================================================================

    #[wasm_bindgen]
    pub fn open_menu(&mut self, data_json: &str) -> Result<(), JsValue> {
        let data = parse_menu_data(Some(data_json))
            .map_err(to_js)?
            .ok_or_else(|| JsValue::from_str("menu data is required"))?;
        self.desktop.menu.open_menu(data);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn close_menu(&mut self) {
        self.desktop.menu.close_menu();
    }

    /// Toggle with optional JSON menu data
    #[wasm_bindgen]
    pub fn toggle_menu(&mut self, data_json: Option<String>) -> Result<(), JsValue> {
        let data = parse_menu_data(data_json.as_deref()).map_err(to_js)?;
        self.desktop.menu.toggle_menu(data);
        Ok(())
    }

    /// Toggle the catalogued mobile menu of an app
    #[wasm_bindgen]
    pub fn toggle_app_menu(&mut self, app_id: &str) -> Result<(), JsValue> {
        let result = match &self.translator {
            Some(f) => self.desktop.toggle_app_menu(app_id, &JsLocalizer(f)),
            None => self.desktop.toggle_app_menu(app_id, &KeyLocalizer),
        };
        result.map_err(to_js)
    }

    /// Toggle the start menu listing every catalogued app
    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        match &self.translator {
            Some(f) => self.desktop.toggle_start_menu(&JsLocalizer(f)),
            None => self.desktop.toggle_start_menu(&KeyLocalizer),
        }
    }

    /// Start menu content as JSON, without opening it
    #[wasm_bindgen]
    pub fn start_menu_json(&self) -> Result<String, JsValue> {
        let data = match &self.translator {
            Some(f) => self.desktop.start_menu(&JsLocalizer(f)),
            None => self.desktop.start_menu(&KeyLocalizer),
        };
        to_json(&data).map_err(to_js)
    }

    // =========================================================================
    // Frame loop and state
    // =========================================================================

    /// Run deferred work; call once per animation frame
    ///
    /// Returns true when state changed and the page should re-render.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.desktop.tick()
    }

    /// Full state as JSON
    #[wasm_bindgen]
    pub fn state_json(&self) -> Result<String, JsValue> {
        to_json(&self.desktop.snapshot()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn active_window_id(&self) -> Option<String> {
        self.desktop.windows.active_id().map(str::to_string)
    }

    #[wasm_bindgen]
    pub fn is_menu_open(&self) -> bool {
        self.desktop.menu.is_open()
    }
}
