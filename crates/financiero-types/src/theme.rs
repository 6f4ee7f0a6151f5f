//! Theme settings handed to the theme provider at startup

use serde::{Deserialize, Serialize};

/// Storage key the theme provider is configured with
pub const DEFAULT_STORAGE_KEY: &str = "vite-ui-theme";

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    /// Follow the OS `prefers-color-scheme` setting
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System => "system",
        }
    }

    /// Next theme in the toggle cycle: dark, light, system
    pub fn next(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::System,
            Theme::System => Theme::Dark,
        }
    }

    /// Class applied to the document root. `System` resolves through
    /// `prefers_dark`.
    pub fn css_class(&self, prefers_dark: bool) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System if prefers_dark => "dark",
            Theme::System => "light",
        }
    }
}

/// Theme provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub default_theme: Theme,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Dark,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
