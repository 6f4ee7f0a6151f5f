//! Page components

mod not_found;
mod placeholder;
mod sections;

pub use not_found::NotFound;
pub use placeholder::SectionPlaceholder;
pub use sections::{
    AccountsPage, DashboardPage, DocumentsPage, ExpensesPage, IncomePage, PeoplePage,
    SettingsPage,
};
