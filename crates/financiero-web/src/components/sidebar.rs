//! Sidebar navigation rendered from the navigation manifest

use financiero_types::{LinkState, NavigationEntry, NAVIGATION};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::{Icon, ThemeToggle};

/// CSS classes for a sidebar link in `state`
///
/// Active links are emphasized; inactive links are muted and only
/// emphasized on hover (see `static/style.css`).
pub fn link_class(state: LinkState) -> &'static str {
    match state {
        LinkState::Active => "sidebar-link sidebar-link-active",
        LinkState::Inactive => "sidebar-link sidebar-link-muted",
    }
}

/// Sidebar with brand, navigation menu, and footer
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <h2 class="sidebar-title">
                    "Financiero"<span class="sidebar-title-accent">"."</span>
                </h2>
                <p class="sidebar-subtitle">"Gestión Integral"</p>
            </div>

            <nav class="nav">
                <ul class="nav-list">
                    {NAVIGATION
                        .iter()
                        .map(|entry| view! { <NavItem entry current_path=location.pathname /> })
                        .collect_view()}
                </ul>
            </nav>

            <div class="sidebar-footer">
                <ThemeToggle />
                <p>"© 2025 Bolt. Todos los derechos reservados."</p>
            </div>
        </aside>
    }
}

/// One navigation link; re-derives its state whenever the route changes
#[component]
fn NavItem(entry: &'static NavigationEntry, current_path: Memo<String>) -> impl IntoView {
    let class = move || current_path.with(|path| link_class(entry.state_for(path)));

    view! {
        <li class="nav-item">
            <A href=entry.path exact=true attr:class=class>
                <span class="sidebar-link-icon">
                    <Icon kind=entry.icon />
                </span>
                <span class="sidebar-link-label">{entry.label}</span>
            </A>
        </li>
    }
}
