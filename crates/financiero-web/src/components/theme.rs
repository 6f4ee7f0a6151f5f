//! Theme context provider
//!
//! Holds the active [`Theme`] and mirrors it as a `light`/`dark` class on the
//! document root. Persisting the choice under `storage_key` belongs to the
//! host storage layer and is not done here.

use financiero_types::{Theme, ThemeConfig};
use leptos::logging;
use leptos::prelude::*;

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme context for the whole view tree
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            theme: RwSignal::new(config.default_theme),
            storage_key: StoredValue::new(config.storage_key),
        }
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Key the theme is persisted under by the host
    pub fn storage_key(&self) -> String {
        self.storage_key.get_value()
    }
}

/// Theme provider component (outermost provider)
#[component]
pub fn ThemeProvider(config: ThemeConfig, children: Children) -> impl IntoView {
    let theme_context = ThemeContext::new(config);

    provide_context(theme_context);

    // Browser only: effects do not run during server rendering
    Effect::new(move |_| apply_theme(theme_context.theme()));

    children()
}

fn apply_theme(theme: Theme) {
    let prefers_dark = window()
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);

    let Some(root) = document().document_element() else {
        return;
    };

    let classes = root.class_list();
    warn_on_dom_error("remove theme classes", classes.remove_2("light", "dark"));
    warn_on_dom_error("add theme class", classes.add_1(theme.css_class(prefers_dark)));
}

/// Log a failed DOM call; returns whether it succeeded
fn warn_on_dom_error<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            logging::warn!("Failed to {}: {:?}", action, err);
            false
        }
    }
}

/// Spanish label shown on the theme toggle
pub fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Oscuro",
        Theme::Light => "Claro",
        Theme::System => "Sistema",
    }
}

/// Button cycling the active theme (dark, light, system)
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_context = use_theme();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme_context.set_theme(theme_context.theme().next())
            aria-label="Cambiar tema"
        >
            "Tema: "
            {move || theme_label(theme_context.theme())}
        </button>
    }
}

/// Hook to access theme context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_starts_from_config() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ThemeContext::new(ThemeConfig::default());
            assert_eq!(ctx.theme(), Theme::Dark);
            assert_eq!(ctx.storage_key(), "vite-ui-theme");

            ctx.set_theme(Theme::Light);
            assert_eq!(ctx.theme(), Theme::Light);
        });
    }

    #[test]
    fn test_dom_errors_are_reported() {
        assert!(warn_on_dom_error::<&str>("add theme class", Ok(())));
        assert!(!warn_on_dom_error("add theme class", Err("InvalidCharacterError")));
    }

    #[test]
    fn test_theme_labels() {
        assert_eq!(theme_label(Theme::Dark), "Oscuro");
        assert_eq!(theme_label(Theme::Light), "Claro");
        assert_eq!(theme_label(Theme::System), "Sistema");
    }
}
