//! Sidebar navigation manifest
//!
//! The manifest is a fixed, ordered list: display order is array order and
//! every destination path appears exactly once.

use serde::{Deserialize, Serialize};

/// Glyph shown next to a navigation label (Lucide icon set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    LayoutDashboard,
    Users,
    FolderOpen,
    ArrowUpCircle,
    ArrowDownCircle,
    Wallet,
    Settings,
}

impl IconKind {
    /// Lucide icon name
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::LayoutDashboard => "layout-dashboard",
            IconKind::Users => "users",
            IconKind::FolderOpen => "folder-open",
            IconKind::ArrowUpCircle => "arrow-up-circle",
            IconKind::ArrowDownCircle => "arrow-down-circle",
            IconKind::Wallet => "wallet",
            IconKind::Settings => "settings",
        }
    }
}

/// Visual state of a sidebar link for the current route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Entry path equals the current path
    Active,
    Inactive,
}

impl LinkState {
    pub fn is_active(&self) -> bool {
        matches!(self, LinkState::Active)
    }
}

/// One static sidebar item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    /// Display label
    pub label: &'static str,
    /// Destination path (unique within the manifest)
    pub path: &'static str,
    pub icon: IconKind,
}

impl NavigationEntry {
    pub const fn new(label: &'static str, path: &'static str, icon: IconKind) -> Self {
        Self { label, path, icon }
    }

    /// Active iff `current_path` equals this entry's path exactly.
    ///
    /// No prefix matching: `/income/2024` does not activate `/income`.
    pub fn state_for(&self, current_path: &str) -> LinkState {
        if self.path == current_path {
            LinkState::Active
        } else {
            LinkState::Inactive
        }
    }
}

/// Sidebar entries in display order
pub static NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry::new("Dashboard", "/", IconKind::LayoutDashboard),
    NavigationEntry::new("Socios Titulares", "/people", IconKind::Users),
    NavigationEntry::new("Documentos", "/partner-documents", IconKind::FolderOpen),
    NavigationEntry::new("Ingresos", "/income", IconKind::ArrowUpCircle),
    NavigationEntry::new("Gastos", "/expenses", IconKind::ArrowDownCircle),
    NavigationEntry::new("Cuentas", "/accounts", IconKind::Wallet),
    NavigationEntry::new("Configuración", "/settings", IconKind::Settings),
];

/// Enumerate the navigation manifest
pub fn manifest() -> &'static [NavigationEntry] {
    NAVIGATION
}

/// Entry whose path equals `path` exactly
pub fn find_by_path(path: &str) -> Option<&'static NavigationEntry> {
    NAVIGATION.iter().find(|entry| entry.path == path)
}

/// Position of the active entry for `current_path`, if any
pub fn active_index(current_path: &str) -> Option<usize> {
    NAVIGATION
        .iter()
        .position(|entry| entry.state_for(current_path).is_active())
}
