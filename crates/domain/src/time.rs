//! Time and timestamp helpers.
//!
//! The backend emits either RFC 3339 timestamps or naive ISO-8601 values
//! without an offset. Naive values are wall-clock times of the machine
//! that wrote them and are resolved in the viewer's local offset, the way
//! a browser reads them. Browser `datetime-local` inputs use the
//! `YYYY-MM-DDTHH:MM` shape.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// UTC instant used for status derivation and ranges.
pub type Timestamp = DateTime<Utc>;

/// Format of the value held by a `datetime-local` input.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format the backend expects for `start_date` / `end_date`.
pub const QUERY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used to display timestamps in the history table.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const NAIVE_WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Current offset of the host's local time zone.
#[must_use]
pub fn local_offset() -> FixedOffset {
    *Local::now().offset()
}

/// A timestamp exactly as the backend sent it.
///
/// Offset-carrying values are pinned instants. Naive values only become an
/// instant once the viewer's offset is known, see [`BackendTime::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendTime {
    /// RFC 3339 value, normalised to UTC.
    Zoned(Timestamp),
    /// Value without an offset.
    Naive(NaiveDateTime),
}

impl BackendTime {
    /// The instant this value denotes for a viewer at `local_offset`.
    #[must_use]
    pub fn resolve(self, local_offset: FixedOffset) -> Timestamp {
        match self {
            Self::Zoned(ts) => ts,
            Self::Naive(naive) => (naive - local_offset).and_utc(),
        }
    }

    /// Wall-clock rendering for a viewer at `local_offset`.
    #[must_use]
    pub fn display(self, local_offset: FixedOffset) -> String {
        self.resolve(local_offset)
            .with_timezone(&local_offset)
            .format(DISPLAY_FORMAT)
            .to_string()
    }
}

impl From<Timestamp> for BackendTime {
    fn from(ts: Timestamp) -> Self {
        Self::Zoned(ts)
    }
}

impl fmt::Display for BackendTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoned(ts) => write!(f, "{}", ts.to_rfc3339()),
            Self::Naive(naive) => write!(f, "{}", naive.format(NAIVE_WIRE_FORMAT)),
        }
    }
}

impl Serialize for BackendTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BackendTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parse a timestamp as sent by the backend.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimestamp`] when the value matches
/// neither RFC 3339 nor one of the naive ISO-8601 shapes.
pub fn parse_timestamp(value: &str) -> Result<BackendTime, ValidationError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(BackendTime::Zoned(dt.to_utc()));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(BackendTime::Naive)
        .ok_or_else(|| ValidationError::InvalidTimestamp(value.to_owned()))
}

/// Parse the value of a `datetime-local` input.
///
/// Seconds are accepted when present (some browsers add them when `step`
/// is set).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when the value is not a
/// `YYYY-MM-DDTHH:MM[:SS]` string.
pub fn parse_datetime_local(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidDate(value.to_owned()))
}

/// Render a timestamp as a `datetime-local` input value, truncated to the minute.
#[must_use]
pub fn format_datetime_local(ts: Timestamp) -> String {
    ts.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Deserialize an optional backend timestamp; `null`, blank and missing map
/// to `None`.
///
/// # Errors
///
/// Fails when a present string is not a recognised timestamp.
pub fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<BackendTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_timestamp(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// A closed time window used to seed the history filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DateRange {
    /// The window of `span` ending at `end`.
    ///
    /// Both bounds are truncated to the minute, matching what a
    /// `datetime-local` input can hold.
    #[must_use]
    pub fn trailing(end: Timestamp, span: Duration) -> Self {
        let end = truncate_to_minute(end);
        Self {
            start: end - span,
            end,
        }
    }

    /// Input values for the start and end `datetime-local` fields.
    #[must_use]
    pub fn to_input_values(&self) -> (String, String) {
        (format_datetime_local(self.start), format_datetime_local(self.end))
    }
}

fn truncate_to_minute(ts: Timestamp) -> Timestamp {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}
