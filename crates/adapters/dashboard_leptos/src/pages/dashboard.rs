//! The single dashboard page: live panel on top, history below.

use leptos::prelude::*;

use crate::components::{CountChart, HistoryFilter, HistoryTable, LivePanel, Pager};
use crate::state::use_dashboard;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_dashboard();
    let history = state.history;

    view! {
        <div class="dashboard">
            <LivePanel/>
            <section class="card history">
                <h2>"History"</h2>
                <HistoryFilter/>
                <CountChart chart=Signal::derive(move || history.get().chart)/>
                <HistoryTable body=Signal::derive(move || history.get().table)/>
                <Pager/>
            </section>
        </div>
    }
}
