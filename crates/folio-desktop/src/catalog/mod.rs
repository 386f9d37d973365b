//! Static app catalog
//!
//! The tables the portfolio ships with: which apps exist, what the start
//! menu lists and what the mobile per-app menus contain. Titles and
//! descriptions are translation keys; a [`Localizer`] turns them into
//! display strings when a table entry is resolved.

mod apps;
mod localizer;
mod menus;

pub use apps::{find_app, AppConfig, AppIcon, APPS};
pub use localizer::{KeyLocalizer, Localizer};
pub use menus::{
    find_mobile_menu, MenuConfig, MenuItemConfig, MOBILE_MENUS, START_MENU, START_MENU_ITEMS,
};
