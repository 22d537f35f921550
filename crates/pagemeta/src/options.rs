// ABOUTME: Configuration for the extraction client: timeout, user agent, request headers and network policy.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Desktop Chrome user agent sent by default.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Referer sent with every request unless overridden.
pub const DEFAULT_REFERER: &str = "https://www.google.com";

/// Accept-Language sent with every request unless overridden; Japanese first.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "ja,en-US;q=0.9,en;q=0.8";

/// Configuration options for the client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub allow_private_networks: bool,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        let headers = HashMap::from([
            ("Referer".to_string(), DEFAULT_REFERER.to_string()),
            (
                "Accept-Language".to_string(),
                DEFAULT_ACCEPT_LANGUAGE.to_string(),
            ),
        ]);
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            allow_private_networks: false,
            http_client: None,
            headers,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Allow or disallow requests to private networks.
    pub fn allow_private_networks(mut self, allow: bool) -> Self {
        self.opts.allow_private_networks = allow;
        self
    }

    /// Use a custom HTTP client. Timeout and user agent settings are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add or replace a header sent with every request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_browser_profile() {
        let opts = Options::default();
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert_eq!(opts.user_agent, DEFAULT_USER_AGENT);
        assert!(!opts.allow_private_networks);
        assert_eq!(
            opts.headers.get("Referer").map(String::as_str),
            Some(DEFAULT_REFERER)
        );
        assert_eq!(
            opts.headers.get("Accept-Language").map(String::as_str),
            Some(DEFAULT_ACCEPT_LANGUAGE)
        );
    }

    #[test]
    fn builder_overrides_headers() {
        let builder = ClientBuilder::new()
            .header("Accept-Language", "en")
            .header("X-Test", "1")
            .timeout(Duration::from_secs(5));
        assert_eq!(builder.opts.headers.get("Accept-Language").unwrap(), "en");
        assert_eq!(builder.opts.headers.get("X-Test").unwrap(), "1");
        assert_eq!(builder.opts.timeout, Duration::from_secs(5));
    }
}
