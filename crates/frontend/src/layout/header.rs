use leptos::prelude::*;

const MENU: [&str; 5] = ["Dashboard", "Products", "Orders", "Customers", "Reports"];

/// Static top bar: application title and the section menu.
/// Only the dashboard section is implemented; the other entries are
/// placeholders for the rest of the ERP.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"Basic Store ERP"</h1>
            <nav>
                <ul class="app-menu">
                    {MENU
                        .iter()
                        .map(|item| view! { <li class="app-menu-item">{*item}</li> })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
