//! Online/idle status dot and label.

use countdash_domain::status::SystemStatus;
use leptos::prelude::*;

#[component]
pub fn StatusIndicator(#[prop(into)] status: Signal<SystemStatus>) -> impl IntoView {
    view! {
        <div class="system-status">
            <span id="statusIndicator" class=move || status.get().indicator_class()></span>
            <span id="systemStatus">{move || status.get().label()}</span>
        </div>
    }
}
