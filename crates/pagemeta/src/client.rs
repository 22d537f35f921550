// ABOUTME: The Client that loads a page and runs the metadata extraction pipeline on it.
// ABOUTME: Provides async extract() for URLs and extract_html() for markup already in hand.

use std::net::ToSocketAddrs;

use crate::document::Document;
use crate::error::LoadError;
use crate::extractors::extract_document;
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, is_private_ip, FetchOptions};
use crate::result::ExtractionResult;

/// Extracts article metadata from web pages.
///
/// Holds immutable configuration and a pooled HTTP client; safe to share
/// across concurrent extractions.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

/// Redirect policy that refuses hops into private networks.
fn redirect_policy(allow_private: bool) -> reqwest::redirect::Policy {
    reqwest::redirect::Policy::custom(move |attempt| {
        if allow_private {
            return attempt.follow();
        }
        let next = attempt.url().clone();
        let Some(host) = next.host_str() else {
            return attempt.follow();
        };
        let bare = host.trim_start_matches('[').trim_end_matches(']');
        if let Ok(ip) = bare.parse::<std::net::IpAddr>() {
            if is_private_ip(&ip) {
                return attempt.error("redirect to private IP blocked");
            }
            return attempt.follow();
        }
        // synchronous DNS resolution to avoid async in redirect policy
        let port = next.port_or_known_default().unwrap_or(80);
        match (host, port).to_socket_addrs() {
            Ok(mut addrs) => {
                if addrs.any(|sa| is_private_ip(&sa.ip())) {
                    attempt.error("redirect to private IP blocked")
                } else {
                    attempt.follow()
                }
            }
            Err(_) => attempt.error("DNS lookup failed during redirect"),
        }
    })
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .redirect(redirect_policy(opts.allow_private_networks))
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "falling back to default HTTP client");
                    reqwest::Client::new()
                })
        });

        Self { opts, http_client }
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Fetch the page at `url` and extract its metadata.
    ///
    /// Only loading can fail; fields the page does not carry come back as `None`.
    #[tracing::instrument(skip(self))]
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult, LoadError> {
        if url.trim().is_empty() {
            return Err(LoadError::invalid_url(
                url,
                "Extract",
                Some(anyhow::anyhow!("URL is required")),
            ));
        }

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            allow_private_networks: self.opts.allow_private_networks,
        };

        let fetched = match fetch(&self.http_client, url, &fetch_opts).await {
            Ok(fetched) => fetched,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load page");
                return Err(err);
            }
        };
        tracing::debug!(
            status = fetched.status,
            final_url = %fetched.final_url,
            bytes = fetched.body.len(),
            "page loaded"
        );

        Ok(self.extract_html(&fetched.text()))
    }

    /// Extract metadata from markup that has already been loaded.
    pub fn extract_html(&self, html: &str) -> ExtractionResult {
        let doc = Document::parse(html);
        extract_document(&doc)
    }
}
