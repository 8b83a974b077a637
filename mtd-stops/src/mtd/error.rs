//! CUMTD client error types.

use std::time::Duration;

/// Message reported when the API signals failure without saying why.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Errors from the CUMTD HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum MtdError {
    /// Request failed before a response arrived (connection refused, DNS, ...)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// No response within the configured timeout
    #[error("request timed out after {}s", .after.as_secs_f64())]
    Timeout { after: Duration },

    /// Server answered with a non-200 HTTP status
    #[error("API returned status {status}")]
    Status { status: u16 },

    /// Response was 200 but the nested API status was not
    #[error("API error: {message}")]
    Api { code: Option<i64>, message: String },

    /// Body was not the JSON shape we expect
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl MtdError {
    /// Build an API error from the nested status fields, falling back to
    /// a generic message when the API omits one.
    pub(crate) fn api(code: Option<i64>, message: Option<String>) -> Self {
        MtdError::Api {
            code,
            message: message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        }
    }
}

impl From<reqwest::Error> for MtdError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key in its query string.
        MtdError::Http(err.without_url())
    }
}

impl From<serde_json::Error> for MtdError {
    fn from(err: serde_json::Error) -> Self {
        MtdError::Json {
            message: err.to_string(),
        }
    }
}
