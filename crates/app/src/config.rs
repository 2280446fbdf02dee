//! Dashboard configuration — TOML with every field defaulted.
//!
//! The browser build embeds `dashboard.toml` at compile time, so the file
//! is optional and an empty document yields the stock dashboard.

use chrono::Duration;
use serde::Deserialize;

use countdash_domain::area::AreaId;
use countdash_domain::history::DEFAULT_PAGE_SIZE;
use countdash_domain::status::{DEFAULT_ONLINE_THRESHOLD, DEFAULT_ONLINE_THRESHOLD_SECS};

/// Largest page the backend accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend location.
    pub api: ApiConfig,
    /// Polling settings.
    pub refresh: RefreshConfig,
    /// Status indicator settings.
    pub status: StatusConfig,
    /// History panel settings.
    pub history: HistoryConfig,
}

/// Backend location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin prefixed to every `/api/...` path. Empty means same origin.
    pub base_url: String,
}

/// Polling settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between two live-stats loads.
    pub live_interval_secs: u32,
}

/// Status indicator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Detections younger than this many seconds show "Online".
    pub online_threshold_secs: u32,
}

/// History panel settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Records per page.
    pub page_size: u32,
    /// Width of the default date range, ending now.
    pub default_range_hours: u32,
    /// Area pre-filled in the filter input.
    pub default_area: Option<AreaId>,
}

impl DashboardConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh.live_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "refresh.live_interval_secs must be non-zero".to_string(),
            ));
        }
        if self.status.online_threshold_secs == 0 {
            return Err(ConfigError::Validation(
                "status.online_threshold_secs must be non-zero".to_string(),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.history.page_size) {
            return Err(ConfigError::Validation(format!(
                "history.page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        if self.history.default_range_hours == 0 {
            return Err(ConfigError::Validation(
                "history.default_range_hours must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Build an absolute URL for an API path such as `/api/health`.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api.base_url.trim_end_matches('/'))
    }

    /// Polling period in milliseconds.
    #[must_use]
    pub fn live_interval_millis(&self) -> u32 {
        self.refresh.live_interval_secs.saturating_mul(1000)
    }

    #[must_use]
    pub fn online_threshold(&self) -> Duration {
        Duration::seconds(i64::from(self.status.online_threshold_secs))
    }

    #[must_use]
    pub fn default_range(&self) -> Duration {
        Duration::hours(i64::from(self.history.default_range_hours))
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            live_interval_secs: 5,
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            online_threshold_secs: DEFAULT_ONLINE_THRESHOLD_SECS,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_range_hours: 24,
            default_area: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
