use countdash_app::config::DashboardConfig;
use leptos::prelude::*;

pub mod api;
pub mod bindings;
pub mod canvas;
mod components;
mod pages;
pub mod state;

use components::Header;
use pages::Dashboard;
use state::DashboardState;

/// Configuration compiled into the bundle.
const CONFIG_TOML: &str = include_str!("../dashboard.toml");

/// Parse the embedded configuration, falling back to defaults.
fn load_config() -> DashboardConfig {
    DashboardConfig::from_toml_str(CONFIG_TOML).unwrap_or_else(|err| {
        leptos::logging::warn!("invalid dashboard.toml, using defaults: {err}");
        DashboardConfig::default()
    })
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let state = DashboardState::new(load_config());
    provide_context(state);
    bindings::register(state);

    state.check_health();
    state.start_auto_refresh();

    view! {
        <Header/>
        <main>
            <Dashboard/>
        </main>
    }
}
