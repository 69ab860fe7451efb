use crate::dashboard::ui::page::DashboardPage;
use crate::layout::header::Header;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main>
                <Routes fallback=|| view! { <p class="error">"Page not found"</p> }>
                    <Route path=path!("/") view=DashboardPage />
                </Routes>
            </main>
        </Router>
    }
}
