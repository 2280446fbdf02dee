//! Live stats service — polls the latest counts and derives the system status.

use chrono::Duration;
use countdash_domain::area::parse_area_filter;
use countdash_domain::error::DashboardError;
use countdash_domain::stats::LiveStats;
use countdash_domain::status::SystemStatus;

use crate::ports::{Clock, StatsApi};

/// Outcome of one live-stats load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveUpdate {
    Loaded {
        stats: LiveStats,
        status: SystemStatus,
    },
    Failed(DashboardError),
}

/// What the live panel currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LivePanel {
    pub count_in: u64,
    pub count_out: u64,
    pub active_objects: u64,
    pub status: SystemStatus,
}

impl LivePanel {
    /// Fold a load outcome into the panel.
    ///
    /// A failure only flips the status to [`SystemStatus::Error`]; the
    /// counts from the last good load stay on screen.
    pub fn apply(&mut self, update: &LiveUpdate) {
        match update {
            LiveUpdate::Loaded { stats, status } => {
                self.count_in = stats.current_count_in;
                self.count_out = stats.current_count_out;
                self.active_objects = stats.active_objects;
                self.status = *status;
            }
            LiveUpdate::Failed(_) => self.status = SystemStatus::Error,
        }
    }
}

/// Application service loading live stats.
pub struct LiveStatsService<A, C> {
    api: A,
    clock: C,
    online_threshold: Duration,
}

impl<A: StatsApi, C: Clock> LiveStatsService<A, C> {
    /// Create a new service backed by the given API and clock.
    pub fn new(api: A, clock: C, online_threshold: Duration) -> Self {
        Self {
            api,
            clock,
            online_threshold,
        }
    }

    /// Load live stats for the raw area filter input.
    ///
    /// Never fails: any error, including an invalid filter, comes back as
    /// [`LiveUpdate::Failed`] after being logged.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, area_input: &str) -> LiveUpdate {
        match self.try_load(area_input).await {
            Ok(stats) => {
                let offset = self.clock.local_offset();
                let status = SystemStatus::from_last_detection(
                    stats.last_detection.map(|at| at.resolve(offset)),
                    self.clock.now(),
                    self.online_threshold,
                );
                tracing::debug!(
                    count_in = stats.current_count_in,
                    count_out = stats.current_count_out,
                    active = stats.active_objects,
                    status = status.label(),
                    "live stats loaded"
                );
                LiveUpdate::Loaded { stats, status }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load live stats");
                LiveUpdate::Failed(err)
            }
        }
    }

    async fn try_load(&self, area_input: &str) -> Result<LiveStats, DashboardError> {
        let area = parse_area_filter(area_input)?;
        self.api.fetch_live(area).await
    }
}
