//! Live counts panel: area filter, three stat cards and the status indicator.

use leptos::prelude::*;

use super::{StatCard, StatusIndicator};
use crate::state::use_dashboard;

#[component]
pub fn LivePanel() -> impl IntoView {
    let state = use_dashboard();
    let live = state.live;

    view! {
        <section class="card live-stats">
            <div class="card-header">
                <h2>"Live Statistics"</h2>
                <StatusIndicator status=Signal::derive(move || live.get().status)/>
            </div>
            <label for="areaFilter">"Area"</label>
            <input
                id="areaFilter"
                type="number"
                min="1"
                placeholder="All areas"
                prop:value=move || state.area.get()
                on:input=move |ev| state.area.set(event_target_value(&ev))
            />
            <button class="btn btn-primary" on:click=move |_| state.refresh_live_stats()>
                "Refresh"
            </button>
            <div class="stat-grid">
                <StatCard
                    id="liveCountIn"
                    label="People In"
                    value=Signal::derive(move || live.get().count_in)
                />
                <StatCard
                    id="liveCountOut"
                    label="People Out"
                    value=Signal::derive(move || live.get().count_out)
                />
                <StatCard
                    id="activeObjects"
                    label="Active Objects"
                    value=Signal::derive(move || live.get().active_objects)
                />
            </div>
        </section>
    }
}
