pub mod view_model;

use crate::shared::number_format::format_currency;
use leptos::prelude::*;
use view_model::{AddSaleViewModel, StatusKind};

/// Multi-line sale entry form. Reference lists load on mount; the draft is
/// validated locally before anything is sent.
#[component]
pub fn AddSaleForm(on_sale_added: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = AddSaleViewModel::new();
    vm.load_reference_data();

    let status_view = move || {
        vm.status.get().map(|message| {
            let class = match message.kind {
                StatusKind::Success => "message message-success",
                StatusKind::Error => "message message-error",
            };
            view! { <div class=class>{message.text}</div> }
        })
    };

    let customer_options = move || {
        vm.customers
            .get()
            .into_iter()
            .map(|customer| {
                let value = customer.id.to_string();
                let selected = vm.selected_customer.get() == value;
                view! {
                    <option value=value selected=selected>{customer.name}</option>
                }
            })
            .collect_view()
    };

    let item_rows = move || {
        let products = vm.products.get();
        let single_row = vm.items.with(|items| items.len() == 1);
        vm.items
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let product_options = products
                    .iter()
                    .map(|product| {
                        let value = product.id.to_string();
                        let selected = item.product_id == value;
                        let label = format!(
                            "{} ({}) - Stock: {}",
                            product.name,
                            format_currency(product.price),
                            product.stock_quantity
                        );
                        view! {
                            <option value=value selected=selected>{label}</option>
                        }
                    })
                    .collect_view();

                view! {
                    <div class="sale-item-row">
                        <select
                            class="sale-item-row__product"
                            on:change=move |ev| {
                                vm.set_row_product(index, event_target_value(&ev));
                            }
                        >
                            <option value="" selected=item.product_id.is_empty()>
                                "-- Select Product --"
                            </option>
                            {product_options}
                        </select>
                        <input
                            class="sale-item-row__quantity"
                            type="number"
                            min="1"
                            prop:value=item.quantity.to_string()
                            on:input=move |ev| {
                                vm.set_row_quantity(index, event_target_value(&ev));
                            }
                        />
                        <button
                            type="button"
                            class="btn btn-danger"
                            disabled=single_row
                            on:click=move |_| vm.remove_row(index)
                        >
                            "-"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="panel add-sale-form">
            <h3>"Add New Sale"</h3>
            {status_view}
            <form on:submit=move |ev| {
                ev.prevent_default();
                vm.submit(on_sale_added);
            }>
                <div class="form-field">
                    <label for="customer">"Customer (Optional):"</label>
                    <select
                        id="customer"
                        on:change=move |ev| {
                            vm.selected_customer.set(event_target_value(&ev));
                        }
                    >
                        <option value="" selected=move || vm.selected_customer.get().is_empty()>
                            "-- Select Customer --"
                        </option>
                        {customer_options}
                    </select>
                </div>

                <div class="form-field">
                    <label>"Sale Items:"</label>
                    {item_rows}
                    <button type="button" class="btn btn-secondary" on:click=move |_| vm.add_row()>
                        "+ Add Item"
                    </button>
                </div>

                <div class="form-total">
                    "Total: " {move || format_currency(vm.preview_total())}
                    <span class="form-total__hint">
                        " (preview - the final amount is computed by the server)"
                    </span>
                </div>

                <div class="form-actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || vm.submitting.get()
                    >
                        {move || {
                            if vm.submitting.get() { "Adding Sale..." } else { "Add Sale" }
                        }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled=move || vm.submitting.get()
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
