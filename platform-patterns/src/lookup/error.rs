//! Lookup service error types.

use crate::domain::StationId;

/// Errors that can occur when querying the transit lookup service.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No station exists with the given id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Mock fixture could not be loaded
    #[error("mock data error: {message}")]
    MockData { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let id = StationId::parse("900000100003").unwrap();
        assert_eq!(
            LookupError::StationNotFound(id).to_string(),
            "station 900000100003 not found"
        );

        let err = LookupError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = LookupError::Json {
            message: "expected array".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected array");
    }
}
