//! Area — the zone filter that scopes which counts the backend returns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Backend identifier of a counting area.
///
/// Always positive, including when decoded from JSON or TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AreaId(i64);

impl AreaId {
    /// Wrap a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArea`] for zero or negative ids.
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw < 1 {
            return Err(ValidationError::InvalidArea(raw.to_string()));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AreaId {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AreaId> for i64 {
    fn from(id: AreaId) -> Self {
        id.0
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AreaId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidArea(s.to_owned()))?;
        Self::new(raw)
    }
}

/// Parse the area filter input; blank means "no filter".
///
/// # Errors
///
/// Returns [`ValidationError::InvalidArea`] when the input is neither blank
/// nor a positive integer.
pub fn parse_area_filter(input: &str) -> Result<Option<AreaId>, ValidationError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    input.parse().map(Some)
}
