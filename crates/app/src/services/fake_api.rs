//! Scripted [`StatsApi`] and pinned [`Clock`] used by the service tests.

use std::cell::RefCell;
use std::future::Future;

use chrono::FixedOffset;
use countdash_domain::area::AreaId;
use countdash_domain::error::DashboardError;
use countdash_domain::history::HistoryQuery;
use countdash_domain::stats::{HealthStatus, HistoryRecord, LiveStats};
use countdash_domain::time::Timestamp;

use crate::ports::{Clock, StatsApi};

/// A clock stopped at `now`, in a zone `offset_hours` east of UTC.
pub struct FixedClock {
    pub now: Timestamp,
    pub offset_hours: i32,
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn local_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.offset_hours * 3600).unwrap()
    }
}

#[derive(Default)]
pub struct FakeStatsApi {
    pub live: RefCell<Option<Result<LiveStats, DashboardError>>>,
    pub history: RefCell<Option<Result<Vec<HistoryRecord>, DashboardError>>>,
    pub health: RefCell<Option<Result<HealthStatus, DashboardError>>>,
    pub live_areas: RefCell<Vec<Option<AreaId>>>,
    pub history_queries: RefCell<Vec<HistoryQuery>>,
}

fn missing<T>() -> Result<T, DashboardError> {
    Err(DashboardError::Request("no scripted response".to_string()))
}

impl StatsApi for FakeStatsApi {
    fn fetch_live(
        &self,
        area: Option<AreaId>,
    ) -> impl Future<Output = Result<LiveStats, DashboardError>> {
        self.live_areas.borrow_mut().push(area);
        let result = self.live.borrow().clone().unwrap_or_else(missing);
        async move { result }
    }

    fn fetch_history(
        &self,
        query: &HistoryQuery,
    ) -> impl Future<Output = Result<Vec<HistoryRecord>, DashboardError>> {
        self.history_queries.borrow_mut().push(query.clone());
        let result = self.history.borrow().clone().unwrap_or_else(missing);
        async move { result }
    }

    fn fetch_health(&self) -> impl Future<Output = Result<HealthStatus, DashboardError>> {
        let result = self.health.borrow().clone().unwrap_or_else(missing);
        async move { result }
    }
}
