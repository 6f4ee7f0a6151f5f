//! One page per sidebar section

use leptos::prelude::*;

use super::SectionPlaceholder;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <SectionPlaceholder
            path="/"
            description="Resumen de ingresos, gastos y saldos de cuentas."
        />
    }
}

#[component]
pub fn PeoplePage() -> impl IntoView {
    view! {
        <SectionPlaceholder
            path="/people"
            description="Alta y consulta de socios titulares."
        />
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <SectionPlaceholder
            path="/partner-documents"
            description="Documentación asociada a cada socio."
        />
    }
}

#[component]
pub fn IncomePage() -> impl IntoView {
    view! {
        <SectionPlaceholder
            path="/income"
            description="Registro de ingresos por socio y cuenta."
        />
    }
}

#[component]
pub fn ExpensesPage() -> impl IntoView {
    view! {
        <SectionPlaceholder
            path="/expenses"
            description="Registro y categorización de gastos."
        />
    }
}

#[component]
pub fn AccountsPage() -> impl IntoView {
    view! {
        <SectionPlaceholder
            path="/accounts"
            description="Cuentas bancarias y de caja con su saldo actual."
        />
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <SectionPlaceholder
            path="/settings"
            description="Preferencias de la aplicación."
        />
    }
}
