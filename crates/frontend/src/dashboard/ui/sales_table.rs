use crate::shared::number_format::format_currency;
use contracts::sales::SaleRecord;
use leptos::prelude::*;

/// Pure render of the fetched sales collection, in backend order.
#[component]
pub fn SalesTable(sales: Vec<SaleRecord>) -> impl IntoView {
    view! {
        <div class="table-container">
            <table>
                <thead>
                    <tr>
                        <th>"Sale ID"</th>
                        <th>"Date"</th>
                        <th>"Product"</th>
                        <th>"Quantity"</th>
                        <th class="cell-amount">"Amount"</th>
                        <th>"Customer"</th>
                    </tr>
                </thead>
                <tbody>
                    {sales
                        .into_iter()
                        .map(|sale| {
                            let customer = sale
                                .customer_name
                                .unwrap_or_else(|| "N/A".to_string());
                            view! {
                                <tr>
                                    <td>{sale.id}</td>
                                    <td>{sale.sale_date}</td>
                                    <td>{sale.product_name}</td>
                                    <td>{sale.quantity}</td>
                                    <td class="cell-amount">{format_currency(sale.amount)}</td>
                                    <td>{customer}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
