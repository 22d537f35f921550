// ABOUTME: Error types for the document loader, with an ErrorCode enum and the LoadError struct.
// ABOUTME: Field absence is never an error; only fetching a page can fail.

use std::fmt;

/// Error codes representing the categories of page load failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Fetch,
    Timeout,
    Ssrf,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Timeout => "timeout",
            ErrorCode::Ssrf => "SSRF blocked",
        };
        write!(f, "{}", s)
    }
}

/// The error returned when a page could not be loaded.
#[derive(Debug, thiserror::Error)]
pub struct LoadError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pagemeta: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl LoadError {
    fn new(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create a Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Fetch, url, op, source)
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Timeout, url, op, source)
    }

    /// Create an SSRF error.
    pub fn ssrf(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Ssrf, url, op, source)
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    /// Returns true if this is an SSRF error.
    pub fn is_ssrf(&self) -> bool {
        self.code == ErrorCode::Ssrf
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// The innermost cause as a message, without the op/url prefix.
    pub fn cause_message(&self) -> String {
        match self.source {
            Some(ref src) => src.to_string(),
            None => self.code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_op_url_code_and_source() {
        let err = LoadError::fetch(
            "https://example.com",
            "Fetch",
            Some(anyhow::anyhow!("HTTP status 404")),
        );
        assert_eq!(
            err.to_string(),
            "pagemeta: Fetch https://example.com: fetch error: HTTP status 404"
        );
    }

    #[test]
    fn display_without_source() {
        let err = LoadError::invalid_url("", "Extract", None);
        assert_eq!(err.to_string(), "pagemeta: Extract : invalid URL");
    }

    #[test]
    fn code_helpers() {
        assert!(LoadError::timeout("u", "Fetch", None).is_timeout());
        assert!(LoadError::ssrf("u", "Fetch", None).is_ssrf());
        assert!(LoadError::fetch("u", "Fetch", None).is_fetch());
        assert!(LoadError::invalid_url("u", "Fetch", None).is_invalid_url());
        assert!(!LoadError::fetch("u", "Fetch", None).is_timeout());
    }

    #[test]
    fn cause_message_prefers_source() {
        let err = LoadError::fetch("u", "Fetch", Some(anyhow::anyhow!("boom")));
        assert_eq!(err.cause_message(), "boom");
        assert_eq!(LoadError::ssrf("u", "Fetch", None).cause_message(), "SSRF blocked");
    }
}
