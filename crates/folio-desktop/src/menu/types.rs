use serde::{Deserialize, Serialize};

/// What selecting a menu entry does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    /// Launches an app window
    #[default]
    App,
    /// Jumps to a section inside an app
    Section,
    /// Runs a named action (e.g. downloading a resume)
    Action,
}

impl MenuItemKind {
    /// Parse from string ID (e.g., "app", "section", "action")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "app" => Some(MenuItemKind::App),
            "section" => Some(MenuItemKind::Section),
            "action" => Some(MenuItemKind::Action),
            _ => None,
        }
    }

    /// Get the string ID for this kind
    pub fn id(&self) -> &'static str {
        match self {
            MenuItemKind::App => "app",
            MenuItemKind::Section => "section",
            MenuItemKind::Action => "action",
        }
    }
}

/// One selectable entry in the start menu
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartMenuItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: MenuItemKind,
    /// Component opened by `App` entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Name of the action the view layer runs on selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Content shown by the start menu for one app
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartMenuData {
    /// App the menu belongs to; compared by `toggle`
    pub app: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<StartMenuItem>,
}

impl StartMenuData {
    /// Menu with a title and no entries
    pub fn new(app: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            title: title.into(),
            description: None,
            items: Vec::new(),
        }
    }
}
