//! Global JS functions for inline `onclick` handlers in host pages.
//!
//! [`install_globals`] defines `window.refreshLiveStats` and
//! `window.loadHistory`. They act on the dashboard passed to [`register`];
//! before that they only log a warning.

use std::cell::Cell;

use wasm_bindgen::prelude::*;

use crate::state::DashboardState;

/// Names of the functions defined on `window`.
pub const REFRESH_LIVE_STATS: &str = "refreshLiveStats";
pub const LOAD_HISTORY: &str = "loadHistory";

thread_local! {
    static DASHBOARD: Cell<Option<DashboardState>> = const { Cell::new(None) };
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Make `state` the target of the global functions, installing them on
/// first use.
pub fn register(state: DashboardState) {
    DASHBOARD.with(|slot| slot.set(Some(state)));
    install_globals();
}

/// Define the global functions on `window`. Later calls are no-ops.
pub fn install_globals() {
    if INSTALLED.with(|done| done.replace(true)) {
        return;
    }
    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("no window, global functions not installed");
        return;
    };
    define(&window, REFRESH_LIVE_STATS, DashboardState::refresh_live_stats);
    define(&window, LOAD_HISTORY, DashboardState::load_history);
}

fn define(window: &web_sys::Window, name: &str, action: fn(DashboardState)) {
    let callback = Closure::<dyn Fn()>::new(move || with_dashboard(action));
    if let Err(err) = js_sys::Reflect::set(window, &JsValue::from_str(name), callback.as_ref()) {
        leptos::logging::error!("failed to define window.{name}: {err:?}");
    }
    // The page lives as long as the functions do.
    callback.forget();
}

fn with_dashboard(action: fn(DashboardState)) {
    match DASHBOARD.with(Cell::get) {
        Some(state) => action(state),
        None => leptos::logging::warn!("dashboard not mounted yet"),
    }
}
