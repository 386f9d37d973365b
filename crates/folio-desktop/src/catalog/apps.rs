use serde::{Deserialize, Serialize};

use super::Localizer;

/// Icons available to taskbar and window title bars
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppIcon {
    Computer,
    Folder,
    Briefcase,
    Mail,
    Graduation,
}

impl AppIcon {
    /// Get all available icons
    pub fn all() -> &'static [AppIcon] {
        &[
            AppIcon::Computer,
            AppIcon::Folder,
            AppIcon::Briefcase,
            AppIcon::Mail,
            AppIcon::Graduation,
        ]
    }

    /// Get the string ID the view layer resolves to an asset
    pub fn id(&self) -> &'static str {
        match self {
            AppIcon::Computer => "computer",
            AppIcon::Folder => "folder",
            AppIcon::Briefcase => "briefcase",
            AppIcon::Mail => "mail",
            AppIcon::Graduation => "graduation",
        }
    }

    /// Parse from string ID
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|icon| icon.id() == id)
    }
}

/// An app that can be launched into a window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Window id the app opens under
    pub id: &'static str,
    pub title_key: &'static str,
    /// Component rendered inside the window
    pub component: &'static str,
    pub icon: AppIcon,
}

impl AppConfig {
    /// Localized window title
    pub fn title(&self, localizer: &impl Localizer) -> String {
        localizer.translate(self.title_key)
    }
}

/// Apps shown on the taskbar, in display order
pub const APPS: &[AppConfig] = &[
    AppConfig {
        id: "about",
        title_key: "taskbar.about",
        component: "AboutApp",
        icon: AppIcon::Computer,
    },
    AppConfig {
        id: "projects",
        title_key: "taskbar.projects",
        component: "ProjectsApp",
        icon: AppIcon::Folder,
    },
    AppConfig {
        id: "experience",
        title_key: "taskbar.experience",
        component: "ExperienceApp",
        icon: AppIcon::Briefcase,
    },
    AppConfig {
        id: "contact",
        title_key: "taskbar.contact",
        component: "ContactApp",
        icon: AppIcon::Mail,
    },
    AppConfig {
        id: "education",
        title_key: "startMenu.education",
        component: "EducationApp",
        icon: AppIcon::Graduation,
    },
];

/// Look up an app by id
pub fn find_app(id: &str) -> Option<&'static AppConfig> {
    APPS.iter().find(|app| app.id == id)
}
