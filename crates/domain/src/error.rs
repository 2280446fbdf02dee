//! Error types shared across the workspace.
//!
//! Every failure the dashboard can hit while talking to the backend or
//! drawing collapses into [`DashboardError`]. Callers treat all variants
//! alike; the variants exist so logs say what actually went wrong.

/// Invalid user input or backend payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid date input: {0:?}")]
    InvalidDate(String),

    #[error("invalid area id: {0:?}")]
    InvalidArea(String),

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}

/// A request or rendering failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body was not the JSON shape we expected.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The chart surface refused a drawing call.
    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_status_error_like_a_fetch_failure() {
        let err = DashboardError::Status {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn should_convert_validation_error_transparently() {
        let err: DashboardError = ValidationError::InvalidArea("abc".to_string()).into();
        assert_eq!(err.to_string(), "invalid area id: \"abc\"");
    }
}
