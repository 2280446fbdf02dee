//! Health probe run once when the dashboard starts.

use crate::ports::StatsApi;

/// Backend reachability shown in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiHealth {
    #[default]
    Unknown,
    Healthy,
    Degraded,
    Unreachable,
}

impl ApiHealth {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "API: checking...",
            Self::Healthy => "API healthy",
            Self::Degraded => "API degraded",
            Self::Unreachable => "API unreachable",
        }
    }
}

/// Ask the backend whether it is healthy. Failures are logged, not raised.
#[tracing::instrument(skip(api))]
pub async fn probe(api: &impl StatsApi) -> ApiHealth {
    match api.fetch_health().await {
        Ok(health) if health.is_healthy() => ApiHealth::Healthy,
        Ok(health) => {
            tracing::warn!(status = %health.status, "backend reports unhealthy");
            ApiHealth::Degraded
        }
        Err(err) => {
            tracing::warn!(error = %err, "health probe failed");
            ApiHealth::Unreachable
        }
    }
}

#[cfg(test)]
mod tests {
    use countdash_domain::error::DashboardError;
    use countdash_domain::stats::HealthStatus;

    use super::*;
    use crate::services::fake_api::FakeStatsApi;

    fn api_with(result: Result<HealthStatus, DashboardError>) -> FakeStatsApi {
        let api = FakeStatsApi::default();
        *api.health.borrow_mut() = Some(result);
        api
    }

    #[tokio::test]
    async fn should_report_healthy_backend() {
        let api = api_with(Ok(HealthStatus {
            status: "healthy".to_string(),
            timestamp: None,
        }));
        assert_eq!(probe(&api).await, ApiHealth::Healthy);
    }

    #[tokio::test]
    async fn should_report_degraded_status() {
        let api = api_with(Ok(HealthStatus {
            status: "starting".to_string(),
            timestamp: None,
        }));
        assert_eq!(probe(&api).await.label(), "API degraded");
    }

    #[tokio::test]
    async fn should_report_unreachable_on_failure() {
        let api = api_with(Err(DashboardError::Request("connection refused".to_string())));
        assert_eq!(probe(&api).await, ApiHealth::Unreachable);
    }
}
