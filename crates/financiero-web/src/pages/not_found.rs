//! Fallback for paths outside the navigation manifest

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h2 class="page-title">"Página no encontrada"</h2>
            <A href="/" attr:class="btn btn-primary">"Volver al Dashboard"</A>
        </div>
    }
}
