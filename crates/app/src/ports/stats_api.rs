//! Stats API port — the backend's counting endpoints.
//!
//! Futures carry no `Send` bound: the browser adapter is backed by `fetch`,
//! whose futures live on the single-threaded event loop.

use std::future::Future;

use countdash_domain::area::AreaId;
use countdash_domain::error::DashboardError;
use countdash_domain::history::HistoryQuery;
use countdash_domain::stats::{HealthStatus, HistoryRecord, LiveStats};

/// Read access to the counting backend.
pub trait StatsApi {
    /// `GET /api/stats/live`, scoped to `area` when given.
    fn fetch_live(
        &self,
        area: Option<AreaId>,
    ) -> impl Future<Output = Result<LiveStats, DashboardError>>;

    /// `GET /api/stats/` with the query's filters, newest record first.
    fn fetch_history(
        &self,
        query: &HistoryQuery,
    ) -> impl Future<Output = Result<Vec<HistoryRecord>, DashboardError>>;

    /// `GET /api/health`.
    fn fetch_health(&self) -> impl Future<Output = Result<HealthStatus, DashboardError>>;
}
