// ABOUTME: JSON error envelope returned to callers when extraction cannot run.
// ABOUTME: Maps a missing URL to status 400 and a loader failure to status 500.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Message for a request without a URL.
pub const MISSING_URL: &str = "URL is required";

/// Message for a page that could not be fetched.
pub const FETCH_FAILED: &str = "Failed to fetch data from the provided URL";

/// Error body serialized as `{"error": ..., "details": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status this error maps to.
    #[serde(skip)]
    pub status: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// The caller did not supply a URL.
    pub fn missing_url() -> Self {
        Self {
            status: 400,
            error: MISSING_URL.to_string(),
            details: None,
        }
    }

    /// The document loader failed.
    pub fn fetch_failed(err: &LoadError) -> Self {
        Self {
            status: 500,
            error: FETCH_FAILED.to_string(),
            details: Some(err.cause_message()),
        }
    }
}

impl From<&LoadError> for ErrorResponse {
    fn from(err: &LoadError) -> Self {
        Self::fetch_failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_url_is_400_without_details() {
        let resp = ErrorResponse::missing_url();
        assert_eq!(resp.status, 400);
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            serde_json::json!({ "error": "URL is required" })
        );
    }

    #[test]
    fn fetch_failure_is_500_with_details() {
        let err = LoadError::fetch(
            "https://example.com",
            "Fetch",
            Some(anyhow::anyhow!("HTTP status 503")),
        );
        let resp = ErrorResponse::from(&err);
        assert_eq!(resp.status, 500);
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            serde_json::json!({
                "error": "Failed to fetch data from the provided URL",
                "details": "HTTP status 503",
            })
        );
    }
}
