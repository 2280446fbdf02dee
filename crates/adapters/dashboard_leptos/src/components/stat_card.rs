//! Stat card component for displaying a labelled numeric value.

use leptos::prelude::*;

/// A card displaying a label and a live numeric value.
#[component]
pub fn StatCard(
    /// DOM id of the value element.
    id: &'static str,
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The numeric value to display.
    #[prop(into)]
    value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value" id=id>{move || value.get()}</span>
        </div>
    }
}
