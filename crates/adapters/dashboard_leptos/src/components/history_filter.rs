//! Date range inputs and the button that reloads history.

use leptos::prelude::*;

use crate::state::use_dashboard;

#[component]
pub fn HistoryFilter() -> impl IntoView {
    let state = use_dashboard();

    view! {
        <div class="history-filter">
            <label for="startDate">"From"</label>
            <input
                id="startDate"
                type="datetime-local"
                prop:value=move || state.start_date.get()
                on:input=move |ev| state.start_date.set(event_target_value(&ev))
            />
            <label for="endDate">"To"</label>
            <input
                id="endDate"
                type="datetime-local"
                prop:value=move || state.end_date.get()
                on:input=move |ev| state.end_date.set(event_target_value(&ev))
            />
            <button
                class="btn btn-primary"
                disabled=move || state.history_loading.get()
                on:click=move |_| state.load_history()
            >
                "Load History"
            </button>
        </div>
    }
}
