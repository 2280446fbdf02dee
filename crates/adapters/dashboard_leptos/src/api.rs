//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use std::future::Future;

use countdash_app::config::DashboardConfig;
use countdash_app::ports::StatsApi;
use countdash_domain::area::AreaId;
use countdash_domain::error::DashboardError;
use countdash_domain::history::HistoryQuery;
use countdash_domain::stats::{HealthStatus, HistoryRecord, LiveStats};
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// JSON error body returned by the backend on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn into_dashboard_error(err: gloo_net::Error) -> DashboardError {
    match err {
        gloo_net::Error::SerdeError(err) => DashboardError::Decode(err.to_string()),
        other => DashboardError::Request(other.to_string()),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, DashboardError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = resp.json::<ErrorBody>().await.ok().map(|body| body.detail);
    Err(DashboardError::Status {
        status: resp.status(),
        message,
    })
}

/// `GET` `url` and decode its JSON body.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, DashboardError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(into_dashboard_error)?;
    let resp = check_response(resp).await?;
    resp.json::<T>().await.map_err(into_dashboard_error)
}

/// [`StatsApi`] backed by the browser's `fetch`.
#[derive(Debug, Clone, Default)]
pub struct HttpStatsApi {
    base_url: String,
}

impl HttpStatsApi {
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            base_url: config.api_url(""),
        }
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }
}

impl StatsApi for HttpStatsApi {
    fn fetch_live(
        &self,
        area: Option<AreaId>,
    ) -> impl Future<Output = Result<LiveStats, DashboardError>> {
        let url = match area {
            Some(area) => self.url(&format!("/api/stats/live?area_id={area}")),
            None => self.url("/api/stats/live"),
        };
        async move { get_json(&url).await }
    }

    fn fetch_history(
        &self,
        query: &HistoryQuery,
    ) -> impl Future<Output = Result<Vec<HistoryRecord>, DashboardError>> {
        let url = self.url(&format!("/api/stats/?{}", query.to_query_string()));
        async move { get_json(&url).await }
    }

    fn fetch_health(&self) -> impl Future<Output = Result<HealthStatus, DashboardError>> {
        let url = self.url("/api/health");
        async move { get_json(&url).await }
    }
}
