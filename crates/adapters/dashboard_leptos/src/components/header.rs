use leptos::prelude::*;

use crate::state::use_dashboard;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_dashboard();

    view! {
        <header>
            <h1>"People Counting Dashboard"</h1>
            <span class="api-health">{move || state.health.get().label()}</span>
        </header>
    }
}
