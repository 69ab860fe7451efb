use crate::dashboard::state::DashboardContext;
use crate::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The coordinator state container is owned by the composition root and
    // handed down through context.
    provide_context(DashboardContext::new());

    view! {
        <AppRoutes />
    }
}
