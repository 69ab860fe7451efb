use crate::shared::number_format::format_currency;
use contracts::dashboard::DashboardSummary;
use leptos::prelude::*;

/// Pure render of the aggregate summary snapshot. Recreated wholesale by the
/// page whenever a new snapshot arrives, so nothing here is reactive.
#[component]
pub fn SummaryPanel(summary: DashboardSummary) -> impl IntoView {
    let recent_orders = if summary.recent_orders.is_empty() {
        view! { <p class="status status-empty">"No recent orders."</p> }.into_any()
    } else {
        view! {
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>"Order ID"</th>
                            <th>"Date"</th>
                            <th class="cell-amount">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {summary
                            .recent_orders
                            .iter()
                            .map(|order| {
                                view! {
                                    <tr>
                                        <td>{order.id}</td>
                                        <td>{order.date.clone()}</td>
                                        <td class="cell-amount">{format_currency(order.amount)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    };

    let top_products = if summary.top_selling_products.is_empty() {
        view! { <p class="status status-empty">"No top selling products this month."</p> }
            .into_any()
    } else {
        view! {
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Product"</th>
                            <th class="cell-amount">"Units Sold"</th>
                            <th class="cell-amount">"Revenue"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {summary
                            .top_selling_products
                            .iter()
                            .map(|product| {
                                view! {
                                    <tr>
                                        <td>{product.rank}</td>
                                        <td>{product.name.clone()}</td>
                                        <td class="cell-amount">{product.units}</td>
                                        <td class="cell-amount">{format_currency(product.revenue)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="panel">
            <h3>"Summary"</h3>
            <div class="stat-grid">
                <div class="stat-card stat-card--today">
                    <p class="stat-card__label">"Sales Today"</p>
                    <p class="stat-card__value">{format_currency(summary.today_sales)}</p>
                </div>
                <div class="stat-card stat-card--items">
                    <p class="stat-card__label">"Items Sold Today"</p>
                    <p class="stat-card__value">{summary.items_sold_today}</p>
                </div>
                <div class="stat-card stat-card--total">
                    <p class="stat-card__label">"Total Sales (Overall)"</p>
                    <p class="stat-card__value">{format_currency(summary.total_sales)}</p>
                </div>
            </div>

            <h3>"Recent Orders"</h3>
            {recent_orders}

            <h3>"Top Selling Products (This Month)"</h3>
            {top_products}

            <p class="last-updated">"Last Updated: " {summary.last_updated}</p>
        </section>
    }
}
