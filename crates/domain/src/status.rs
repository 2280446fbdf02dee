//! System status derived from the age of the latest detection.

use chrono::Duration;

use crate::time::Timestamp;

/// Detections younger than this many seconds mark the system as online.
pub const DEFAULT_ONLINE_THRESHOLD_SECS: u32 = 60;

/// [`DEFAULT_ONLINE_THRESHOLD_SECS`] as a duration.
#[allow(clippy::cast_lossless)]
pub const DEFAULT_ONLINE_THRESHOLD: Duration = Duration::seconds(DEFAULT_ONLINE_THRESHOLD_SECS as i64);

/// What the status indicator shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SystemStatus {
    /// No live stats received yet.
    #[default]
    Connecting,
    Online,
    Idle,
    NoData,
    /// The last live-stats request failed.
    Error,
}

impl SystemStatus {
    /// Derive the status from the latest detection instant.
    ///
    /// Naive backend times must already be resolved in the viewer's offset.
    /// A detection stamped in the future (clock skew) counts as online.
    #[must_use]
    pub fn from_last_detection(
        last_detection: Option<Timestamp>,
        now: Timestamp,
        online_threshold: Duration,
    ) -> Self {
        match last_detection {
            None => Self::NoData,
            Some(at) if now - at < online_threshold => Self::Online,
            Some(_) => Self::Idle,
        }
    }

    /// Text shown in the `systemStatus` element.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connecting => "Connecting...",
            Self::Online => "Online",
            Self::Idle => "Idle",
            Self::NoData => "No Data",
            Self::Error => "Error",
        }
    }

    /// Class list of the `statusIndicator` element.
    #[must_use]
    pub fn indicator_class(self) -> &'static str {
        match self {
            Self::Online => "status-indicator status-online",
            _ => "status-indicator status-offline",
        }
    }
}
