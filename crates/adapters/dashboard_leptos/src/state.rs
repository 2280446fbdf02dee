//! Reactive dashboard state and the actions that drive it.
//!
//! One [`DashboardState`] exists per page. It is `Copy`, so components and
//! timer callbacks hold it directly; it is provided through Leptos context.

use std::sync::Arc;

use countdash_app::config::DashboardConfig;
use countdash_app::ports::{Clock, SystemClock};
use countdash_app::services::health::{self, ApiHealth};
use countdash_app::services::history::{HistoryService, HistoryView};
use countdash_app::services::live_stats::{LivePanel, LiveStatsService, LiveUpdate};
use countdash_domain::history::{HistoryForm, HistoryQuery};
use countdash_domain::time::DateRange;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpStatsApi;

/// Message of the blocking alert shown when history cannot be loaded.
const HISTORY_ERROR: &str = "Failed to load history data";

/// Signals backing the page plus the services that feed them.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Raw value of the `areaFilter` input.
    pub area: RwSignal<String>,
    /// Raw value of the `startDate` input.
    pub start_date: RwSignal<String>,
    /// Raw value of the `endDate` input.
    pub end_date: RwSignal<String>,
    pub live: RwSignal<LivePanel>,
    pub history: RwSignal<HistoryView>,
    pub history_loading: RwSignal<bool>,
    pub health: RwSignal<ApiHealth>,
    api: StoredValue<HttpStatsApi>,
    live_service: StoredValue<Arc<LiveStatsService<HttpStatsApi, SystemClock>>>,
    history_service: StoredValue<Arc<HistoryService<HttpStatsApi, SystemClock>>>,
    config: StoredValue<DashboardConfig>,
}

impl DashboardState {
    /// Build the state from configuration. Must run inside a reactive owner.
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let api = HttpStatsApi::new(&config);
        let live_service =
            LiveStatsService::new(api.clone(), SystemClock, config.online_threshold());
        let history_service = HistoryService::new(api.clone(), SystemClock, config.history.page_size);
        let area = config
            .history
            .default_area
            .map(|area| area.to_string())
            .unwrap_or_default();

        Self {
            area: RwSignal::new(area),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
            live: RwSignal::new(LivePanel::default()),
            history: RwSignal::new(HistoryView::default()),
            history_loading: RwSignal::new(false),
            health: RwSignal::new(ApiHealth::default()),
            api: StoredValue::new(api),
            live_service: StoredValue::new(Arc::new(live_service)),
            history_service: StoredValue::new(Arc::new(history_service)),
            config: StoredValue::new(config),
        }
    }

    /// Load live stats once and fold the outcome into the live panel.
    pub fn refresh_live_stats(self) {
        let service = self.live_service.get_value();
        let area = self.area.get_untracked();
        spawn_local(async move {
            let update = service.load(&area).await;
            if let LiveUpdate::Failed(err) = &update {
                leptos::logging::error!("Failed to load live stats: {err}");
            }
            self.live.update(|panel| panel.apply(&update));
        });
    }

    /// Load the first page of history for the current filter inputs.
    pub fn load_history(self) {
        let form = HistoryForm {
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            area: self.area.get_untracked(),
        };
        match self.history_service.with_value(|svc| svc.query_from_form(&form)) {
            Ok(query) => self.fetch_history(query),
            Err(err) => report_history_error(&err),
        }
    }

    /// Load another page of the history currently shown.
    pub fn load_page(self, page: u32) {
        let query = self.history.with_untracked(|view| view.query.with_page(page));
        self.fetch_history(query);
    }

    fn fetch_history(self, query: HistoryQuery) {
        let service = self.history_service.get_value();
        self.history_loading.set(true);
        spawn_local(async move {
            match service.load(query).await {
                Ok(view) => self.history.set(view),
                Err(err) => report_history_error(&err),
            }
            self.history_loading.set(false);
        });
    }

    /// Probe the backend once and show the result in the header.
    pub fn check_health(self) {
        let api = self.api.get_value();
        spawn_local(async move {
            let status = health::probe(&api).await;
            if status != ApiHealth::Healthy {
                leptos::logging::warn!("{}", status.label());
            }
            self.health.set(status);
        });
    }

    /// Seed the default date range, load everything once, then poll live
    /// stats forever.
    pub fn start_auto_refresh(self) {
        let (span, interval_ms) = self
            .config
            .with_value(|config| (config.default_range(), config.live_interval_millis()));
        let (start, end) = DateRange::trailing(SystemClock.now(), span).to_input_values();
        self.start_date.set(start);
        self.end_date.set(end);

        self.refresh_live_stats();
        self.load_history();

        Interval::new(interval_ms, move || self.refresh_live_stats()).forget();
    }
}

fn report_history_error(err: &countdash_domain::error::DashboardError) {
    leptos::logging::error!("Failed to load history: {err}");
    leptos::logging::error!("{HISTORY_ERROR}");
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&format!("Error: {HISTORY_ERROR}"));
    }
}

/// Access the dashboard state from Leptos context.
///
/// Must be called within the component tree rendered by [`crate::App`].
pub fn use_dashboard() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not found in context")
}
