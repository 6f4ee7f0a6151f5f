//! Root provider tree and the main Leptos App component

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::bootstrap::BootstrapConfig;
use crate::components::{Sidebar, ThemeProvider, UserProvider};
use crate::pages::{
    AccountsPage, DashboardPage, DocumentsPage, ExpensesPage, IncomePage, NotFound, PeoplePage,
    SettingsPage,
};

/// Application mounted by the bootstrap
#[component]
pub fn AppRoot(config: BootstrapConfig) -> impl IntoView {
    view! {
        <Providers config>
            <App />
        </Providers>
    }
}

/// Providers in fixed order: theme, then user session, then router
#[component]
pub fn Providers(config: BootstrapConfig, children: Children) -> impl IntoView {
    let BootstrapConfig { theme, .. } = config;

    view! {
        <ThemeProvider config=theme>
            <UserProvider>
                <Router>{children()}</Router>
            </UserProvider>
        </ThemeProvider>
    }
}

/// Sidebar layout with one route per navigation entry
///
/// Must be rendered inside a `Router`.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <div class="layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/people") view=PeoplePage />
                        <Route path=path!("/partner-documents") view=DocumentsPage />
                        <Route path=path!("/income") view=IncomePage />
                        <Route path=path!("/expenses") view=ExpensesPage />
                        <Route path=path!("/accounts") view=AccountsPage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </div>
    }
}
