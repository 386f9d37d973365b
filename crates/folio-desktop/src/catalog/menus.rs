use crate::menu::{MenuItemKind, StartMenuData, StartMenuItem};

use super::{AppIcon, Localizer};

/// Start menu entry before localization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItemConfig {
    pub id: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub icon: Option<AppIcon>,
    /// Component launched by `App` entries
    pub component: Option<&'static str>,
    pub kind: MenuItemKind,
}

impl MenuItemConfig {
    const fn section(id: &'static str, title_key: &'static str, description_key: &'static str) -> Self {
        Self {
            id,
            title_key,
            description_key,
            icon: None,
            component: None,
            kind: MenuItemKind::Section,
        }
    }

    const fn app(
        id: &'static str,
        title_key: &'static str,
        description_key: &'static str,
        component: &'static str,
        icon: AppIcon,
    ) -> Self {
        Self {
            id,
            title_key,
            description_key,
            icon: Some(icon),
            component: Some(component),
            kind: MenuItemKind::App,
        }
    }

    /// Localized menu entry
    pub fn resolve(&self, localizer: &impl Localizer) -> StartMenuItem {
        StartMenuItem {
            id: self.id.to_string(),
            title: localizer.translate(self.title_key),
            description: Some(localizer.translate(self.description_key)),
            icon: self.icon.map(|icon| icon.id().to_string()),
            kind: self.kind,
            component: self.component.map(str::to_string),
            route: None,
            action: match self.kind {
                MenuItemKind::Action => Some(self.id.to_string()),
                MenuItemKind::App | MenuItemKind::Section => None,
            },
        }
    }
}

/// Per-app start menu before localization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    pub app: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub items: &'static [MenuItemConfig],
}

impl MenuConfig {
    /// Localized menu content ready for [`StartMenu::open_menu`](crate::StartMenu::open_menu)
    pub fn resolve(&self, localizer: &impl Localizer) -> StartMenuData {
        StartMenuData {
            app: self.app.to_string(),
            title: localizer.translate(self.title_key),
            description: Some(localizer.translate(self.description_key)),
            items: self.items.iter().map(|item| item.resolve(localizer)).collect(),
        }
    }
}

/// Entries of the desktop start menu, in display order
pub const START_MENU_ITEMS: &[MenuItemConfig] = &[
    MenuItemConfig::app(
        "about",
        "taskbar.about",
        "startMenu.aboutDescription",
        "AboutApp",
        AppIcon::Computer,
    ),
    MenuItemConfig::app(
        "projects",
        "taskbar.projects",
        "startMenu.projectsDescription",
        "ProjectsApp",
        AppIcon::Folder,
    ),
    MenuItemConfig::app(
        "experience",
        "taskbar.experience",
        "startMenu.experienceDescription",
        "ExperienceApp",
        AppIcon::Briefcase,
    ),
    MenuItemConfig::app(
        "education",
        "startMenu.education",
        "startMenu.educationDescription",
        "EducationApp",
        AppIcon::Graduation,
    ),
    MenuItemConfig::app(
        "contact",
        "taskbar.contact",
        "startMenu.contactDescription",
        "ContactApp",
        AppIcon::Mail,
    ),
];

/// The desktop start menu opened from the taskbar's start button
pub const START_MENU: MenuConfig = MenuConfig {
    app: "start",
    title_key: "startMenu.title",
    description_key: "startMenu.description",
    items: START_MENU_ITEMS,
};

/// Menus opened from taskbar buttons on small screens
pub const MOBILE_MENUS: &[MenuConfig] = &[
    MenuConfig {
        app: "about",
        title_key: "taskbar.about",
        description_key: "startMenu.aboutDescription",
        items: &[
            MenuItemConfig::section("bio", "startMenu.bio", "startMenu.bioDescription"),
            MenuItemConfig::section("skills", "startMenu.skills", "startMenu.skillsDescription"),
            MenuItemConfig {
                kind: MenuItemKind::Action,
                ..MenuItemConfig::section("resume", "startMenu.resume", "startMenu.resumeDescription")
            },
        ],
    },
    MenuConfig {
        app: "projects",
        title_key: "taskbar.projects",
        description_key: "startMenu.projectsDescription",
        items: &[
            MenuItemConfig::section("web", "startMenu.webProjects", "startMenu.webProjectsDescription"),
            MenuItemConfig::section(
                "mobile",
                "startMenu.mobileProjects",
                "startMenu.mobileProjectsDescription",
            ),
            MenuItemConfig::section(
                "opensource",
                "startMenu.openSource",
                "startMenu.openSourceDescription",
            ),
        ],
    },
    MenuConfig {
        app: "experience",
        title_key: "taskbar.experience",
        description_key: "startMenu.experienceDescription",
        items: &[
            MenuItemConfig::section("work", "startMenu.workHistory", "startMenu.workHistoryDescription"),
            MenuItemConfig::section(
                "education",
                "startMenu.education",
                "startMenu.educationDescription",
            ),
        ],
    },
];

/// Look up the mobile menu of an app
pub fn find_mobile_menu(app: &str) -> Option<&'static MenuConfig> {
    MOBILE_MENUS.iter().find(|menu| menu.app == app)
}
