//! Counting statistics as served by the backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::area::AreaId;
use crate::time::{BackendTime, deserialize_optional_timestamp};

/// Latest snapshot of in/out counts for one area.
///
/// Missing or `null` counts decode as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStats {
    #[serde(default)]
    pub area_id: Option<AreaId>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub current_count_in: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub current_count_out: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub active_objects: u64,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub last_detection: Option<BackendTime>,
}

/// One periodic count snapshot with running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: BackendTime,
    pub area_id: AreaId,
    pub count_in: u64,
    pub count_out: u64,
    pub total_in: u64,
    pub total_out: u64,
}

/// Answer of the backend health probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub timestamp: Option<BackendTime>,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}
