//! Placeholder for sections whose content lives outside this crate

use financiero_types::find_by_path;
use leptos::prelude::*;
use leptos_router::components::A;

/// Section page under development
///
/// The heading reuses the sidebar label of `path` so the two never drift.
#[component]
pub fn SectionPlaceholder(
    /// Route path of the section (e.g., "/income")
    path: &'static str,
    /// What this section will show
    description: &'static str,
) -> impl IntoView {
    let title = find_by_path(path).map(|entry| entry.label).unwrap_or(path);

    view! {
        <div class="page section-page">
            <h2 class="page-title">{title}</h2>
            <div class="empty-state">
                <p class="empty-state-title">"En desarrollo"</p>
                <p class="empty-state-description">{description}</p>
                {(path != "/").then(|| {
                    view! {
                        <div class="empty-state-actions">
                            <A href="/" attr:class="btn btn-primary">
                                "Volver al Dashboard"
                            </A>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
