use crate::dashboard::state::DateBound;
use crate::shared::date_utils::today_iso;
use leptos::prelude::*;

/// Date range control for the sales list. Stateless: both bounds live in the
/// coordinator, and committing a value in either picker triggers the refetch
/// through the page effect.
///
/// Picker constraints: the start cannot exceed the end (or today when the end
/// is unset); the end cannot precede the start nor exceed today.
#[component]
pub fn DateFilter(
    #[prop(into)] start_date: Signal<String>,
    #[prop(into)] end_date: Signal<String>,
    on_change: Callback<(DateBound, String)>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let today = today_iso();
    let start_max = {
        let today = today.clone();
        move || {
            let end = end_date.get();
            if end.is_empty() {
                today.clone()
            } else {
                end
            }
        }
    };

    view! {
        <div class="date-filter">
            <label class="date-filter__field">
                "From:"
                <input
                    type="date"
                    prop:value=start_date
                    max=start_max
                    on:input=move |ev| {
                        on_change.run((DateBound::Start, event_target_value(&ev)));
                    }
                />
            </label>
            <label class="date-filter__field">
                "To:"
                <input
                    type="date"
                    prop:value=end_date
                    min=move || start_date.get()
                    max=today.clone()
                    on:input=move |ev| {
                        on_change.run((DateBound::End, event_target_value(&ev)));
                    }
                />
            </label>
            <button class="btn btn-secondary" on:click=move |_| on_clear.run(())>
                "Clear"
            </button>
        </div>
    }
}
