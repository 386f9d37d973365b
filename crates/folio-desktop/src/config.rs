//! Desktop configuration
//!
//! Every constant the window registry and start menu depend on, with
//! defaults matching the shipped site. The host may override any subset
//! by passing JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Viewport};

/// Viewport width (px) below which single-window mode applies
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Delay before a closed start menu drops its content
pub const MENU_CLOSE_DELAY_MS: f64 = 300.0;

/// Size given to newly opened windows
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(900.0, 600.0);

/// Offset between consecutively opened windows, per axis
pub const CASCADE_STEP: f64 = 20.0;

/// Smallest allowed top-left coordinate for a new window
pub const MIN_WINDOW_MARGIN: f64 = 20.0;

/// First z-index handed out by a fresh registry
pub const INITIAL_Z_INDEX: u32 = 100;

/// Tunables for [`Desktop`](crate::Desktop) and its containers
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    pub default_window_size: Size,
    pub cascade_step: f64,
    pub min_window_margin: f64,
    pub mobile_breakpoint: f64,
    pub menu_close_delay_ms: f64,
    pub initial_z_index: u32,
    pub initial_viewport: Viewport,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            default_window_size: DEFAULT_WINDOW_SIZE,
            cascade_step: CASCADE_STEP,
            min_window_margin: MIN_WINDOW_MARGIN,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            menu_close_delay_ms: MENU_CLOSE_DELAY_MS,
            initial_z_index: INITIAL_Z_INDEX,
            initial_viewport: Viewport::default(),
        }
    }
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the registry cannot work with
    pub fn validate(&self) -> DesktopResult<()> {
        if !self.default_window_size.is_positive() {
            return Err(DesktopError::InvalidConfig {
                field: "defaultWindowSize",
                reason: "width and height must be positive",
            });
        }
        if !self.initial_viewport.size.is_positive() {
            return Err(DesktopError::InvalidConfig {
                field: "initialViewport",
                reason: "width and height must be positive",
            });
        }
        if self.mobile_breakpoint <= 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "mobileBreakpoint",
                reason: "must be positive",
            });
        }
        if self.cascade_step.is_nan() || self.cascade_step < 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "cascadeStep",
                reason: "must not be negative",
            });
        }
        if self.min_window_margin.is_nan() || self.min_window_margin < 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "minWindowMargin",
                reason: "must not be negative",
            });
        }
        if self.menu_close_delay_ms.is_nan() || self.menu_close_delay_ms < 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "menuCloseDelayMs",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DesktopConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_window_size, Size::new(900.0, 600.0));
        assert_eq!(config.initial_z_index, 100);
        assert!((config.menu_close_delay_ms - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DesktopConfig::from_json(r#"{"mobileBreakpoint": 1024}"#).unwrap();
        assert!((config.mobile_breakpoint - 1024.0).abs() < 0.001);
        assert!((config.cascade_step - CASCADE_STEP).abs() < 0.001);
        assert_eq!(config.default_window_size, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = DesktopConfig::from_json("{}").unwrap();
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn test_invalid_breakpoint_rejected() {
        let err = DesktopConfig::from_json(r#"{"mobileBreakpoint": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            DesktopError::InvalidConfig {
                field: "mobileBreakpoint",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_window_size_rejected() {
        let json = r#"{"defaultWindowSize": {"width": 0, "height": 600}}"#;
        assert!(DesktopConfig::from_json(json).is_err());
    }

    #[test]
    fn test_negative_delay_rejected() {
        let json = r#"{"menuCloseDelayMs": -1}"#;
        assert!(DesktopConfig::from_json(json).is_err());
    }

    #[test]
    fn test_negative_cascade_step_rejected() {
        let err = DesktopConfig::from_json(r#"{"cascadeStep": -20}"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig { field: "cascadeStep", .. }));
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = DesktopConfig::from_json(r#"{"minWindowMargin": -5}"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig { field: "minWindowMargin", .. }));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = DesktopConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
