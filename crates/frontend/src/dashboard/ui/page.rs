use crate::dashboard::state::DashboardContext;
use crate::dashboard::ui::add_sale::AddSaleForm;
use crate::dashboard::ui::date_filter::DateFilter;
use crate::dashboard::ui::sales_table::SalesTable;
use crate::dashboard::ui::summary::SummaryPanel;
use leptos::prelude::*;

/// Top-level dashboard view: wires the shared state container to the summary
/// panel, the filtered sales list and the add-sale form.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    // Summary loads once on mount.
    Effect::new(move |_| {
        ctx.load_summary();
    });

    // Sales load on mount and again whenever either date bound changes.
    // This effect is the only fetch path for the list; the filter control
    // itself never fetches.
    Effect::new(move |_| {
        ctx.date_from.track();
        ctx.date_to.track();
        ctx.load_sales();
    });

    let summary_status = move || {
        if ctx.loading.get() {
            Some(view! { <p class="status status-loading">"Loading dashboard data..."</p> }.into_any())
        } else {
            ctx.error.get().map(|e| {
                view! { <p class="status status-error">{e}</p> }.into_any()
            })
        }
    };

    let sales_body = move || {
        if ctx.loading.get() {
            view! { <p class="status status-loading">"Loading sales data..."</p> }.into_any()
        } else if let Some(e) = ctx.error.get() {
            view! { <p class="status status-error">{e}</p> }.into_any()
        } else if ctx.sales.with(|s| s.is_empty()) {
            view! {
                <p class="status status-empty">
                    "No sales data available for the selected period."
                </p>
            }
            .into_any()
        } else {
            view! { <SalesTable sales=ctx.sales.get() /> }.into_any()
        }
    };

    view! {
        <div class="dashboard">
            {summary_status}

            {move || {
                ctx.summary
                    .get()
                    .map(|summary| view! { <SummaryPanel summary=summary /> })
            }}

            <section class="panel">
                <div class="panel-header">
                    <h2>"Individual Sales Records"</h2>
                    <button class="btn btn-primary" on:click=move |_| ctx.toggle_add_form()>
                        {move || {
                            if ctx.show_add_form.get() {
                                "Hide Add Sale Form"
                            } else {
                                "Add New Sale"
                            }
                        }}
                    </button>
                </div>

                <Show
                    when=move || ctx.show_add_form.get()
                    fallback=move || {
                        view! {
                            <DateFilter
                                start_date=ctx.date_from
                                end_date=ctx.date_to
                                on_change=Callback::new(move |(bound, value)| {
                                    ctx.set_date_bound(bound, value)
                                })
                                on_clear=Callback::new(move |_| ctx.clear_dates())
                            />
                            {sales_body}
                        }
                    }
                >
                    <AddSaleForm
                        on_sale_added=Callback::new(move |_| ctx.on_sale_added())
                        on_close=Callback::new(move |_| ctx.show_add_form.set(false))
                    />
                </Show>
            </section>
        </div>
    }
}
