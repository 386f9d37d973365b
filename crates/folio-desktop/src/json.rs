//! JSON decoding for values that cross the page boundary
//!
//! A missing or empty string always means "nothing supplied".

use serde::Serialize;

use crate::config::DesktopConfig;
use crate::error::DesktopResult;
use crate::menu::StartMenuData;
use crate::types::Props;

fn supplied(json: Option<&str>) -> Option<&str> {
    json.filter(|json| !json.is_empty())
}

/// Window props; must be a JSON object when supplied
pub(crate) fn parse_props(json: Option<&str>) -> DesktopResult<Props> {
    match supplied(json) {
        None => Ok(Props::new()),
        Some(json) => Ok(serde_json::from_str(json)?),
    }
}

/// Optional menu content for a toggle
pub(crate) fn parse_menu_data(json: Option<&str>) -> DesktopResult<Option<StartMenuData>> {
    match supplied(json) {
        None => Ok(None),
        Some(json) => Ok(Some(serde_json::from_str(json)?)),
    }
}

/// Desktop config overrides, validated
pub(crate) fn parse_config(json: Option<&str>) -> DesktopResult<DesktopConfig> {
    match supplied(json) {
        None => Ok(DesktopConfig::default()),
        Some(json) => DesktopConfig::from_json(json),
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> DesktopResult<String> {
    Ok(serde_json::to_string(value)?)
}
