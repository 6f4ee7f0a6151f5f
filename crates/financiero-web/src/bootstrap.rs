//! Application startup: locate the mount point and attach the root view
//!
//! The lookup happens before any provider is constructed, so a host page
//! without the mount element never initializes theme, user, or router state.

use financiero_types::ThemeConfig;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::web_sys::HtmlElement;
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::app::AppRoot;

/// Id of the host page element the app mounts into
pub const DEFAULT_MOUNT_ID: &str = "root";

/// Startup failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("Mount point #{id} not found in host page")]
    MissingMountPoint { id: String },
}

/// Process-wide provider configuration, passed down to [`AppRoot`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub mount_id: String,
    pub theme: ThemeConfig,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Page the application is attached to
pub trait MountHost {
    type Node;

    fn find_mount_point(&self, id: &str) -> Option<Self::Node>;

    /// Build the provider tree from `config` and attach it under `node`.
    fn attach(&self, node: Self::Node, config: BootstrapConfig);
}

/// The browser document
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl MountHost for BrowserHost {
    type Node = HtmlElement;

    fn find_mount_point(&self, id: &str) -> Option<HtmlElement> {
        document()
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn attach(&self, node: HtmlElement, config: BootstrapConfig) {
        // Lives for the whole page; never unmounted
        mount_to(node, move || view! { <AppRoot config /> }).forget();
    }
}

/// Mount the application exactly once
pub fn bootstrap<H: MountHost>(host: &H, config: BootstrapConfig) -> Result<(), BootstrapError> {
    let node = host
        .find_mount_point(&config.mount_id)
        .ok_or_else(|| BootstrapError::MissingMountPoint {
            id: config.mount_id.clone(),
        })?;

    host.attach(node, config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use financiero_types::Theme;
    use std::cell::RefCell;

    /// Host page with a fixed set of element ids
    struct FakeHost {
        ids: Vec<&'static str>,
        attached: RefCell<Vec<(String, BootstrapConfig)>>,
    }

    impl FakeHost {
        fn with_ids(ids: Vec<&'static str>) -> Self {
            Self {
                ids,
                attached: RefCell::new(Vec::new()),
            }
        }
    }

    impl MountHost for FakeHost {
        type Node = String;

        fn find_mount_point(&self, id: &str) -> Option<String> {
            self.ids.iter().find(|i| **i == id).map(|i| i.to_string())
        }

        fn attach(&self, node: String, config: BootstrapConfig) {
            self.attached.borrow_mut().push((node, config));
        }
    }

    #[test]
    fn test_default_config() {
        let config = BootstrapConfig::default();
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.theme.default_theme, Theme::Dark);
        assert_eq!(config.theme.storage_key, "vite-ui-theme");
    }

    #[test]
    fn test_bootstrap_attaches_once() {
        let host = FakeHost::with_ids(vec!["header", "root"]);

        bootstrap(&host, BootstrapConfig::default()).unwrap();

        let attached = host.attached.borrow();
        assert_eq!(attached.len(), 1);
        assert_eq!(attached[0].0, "root");
        assert_eq!(attached[0].1, BootstrapConfig::default());
    }

    #[test]
    fn test_missing_mount_point_halts_before_attach() {
        let host = FakeHost::with_ids(vec!["app"]);

        let err = bootstrap(&host, BootstrapConfig::default()).unwrap_err();

        assert_eq!(
            err,
            BootstrapError::MissingMountPoint {
                id: "root".to_string()
            }
        );
        assert!(host.attached.borrow().is_empty());
        assert_eq!(err.to_string(), "Mount point #root not found in host page");
    }

    #[test]
    fn test_custom_mount_id() {
        let host = FakeHost::with_ids(vec!["finance-app"]);
        let config = BootstrapConfig {
            mount_id: "finance-app".to_string(),
            ..BootstrapConfig::default()
        };

        bootstrap(&host, config).unwrap();
        assert_eq!(host.attached.borrow()[0].0, "finance-app");
    }
}
