//! financiero-types - Shared data types for financiero
//!
//! Pure data structures without heavy dependencies, no async runtime.
//!
//! Used by:
//! - financiero-web (frontend WASM + static server)
//! - financiero (CLI)

pub mod navigation;
pub mod theme;

pub use navigation::{
    active_index, find_by_path, manifest, IconKind, LinkState, NavigationEntry, NAVIGATION,
};
pub use theme::{Theme, ThemeConfig, DEFAULT_STORAGE_KEY};
