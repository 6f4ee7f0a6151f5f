//! Leptos UI components

mod icon;
mod sidebar;
mod theme;
mod user;

pub use icon::{Icon, ICON_SIZE};
pub use sidebar::{link_class, Sidebar};
pub use theme::{theme_label, use_theme, ThemeContext, ThemeProvider, ThemeToggle};
pub use user::{use_user, SessionUser, UserContext, UserProvider};
