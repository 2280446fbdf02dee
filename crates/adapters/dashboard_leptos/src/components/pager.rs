//! Previous/next page buttons under the history table.

use leptos::prelude::*;

use crate::state::use_dashboard;

#[component]
pub fn Pager() -> impl IntoView {
    let state = use_dashboard();
    let history = state.history;
    let page = move || history.with(|view| view.query.page);

    view! {
        <div class="pager">
            <button
                class="btn btn-secondary btn-sm"
                disabled=move || !history.with(|view| view.has_previous_page()) || state.history_loading.get()
                on:click=move |_| state.load_page(page().saturating_sub(1))
            >
                "\u{2190} Newer"
            </button>
            <span>"Page " {page}</span>
            <button
                class="btn btn-secondary btn-sm"
                disabled=move || !history.with(|view| view.has_next_page()) || state.history_loading.get()
                on:click=move |_| state.load_page(page() + 1)
            >
                "Older \u{2192}"
            </button>
        </div>
    }
}
