//! The Alpha Vantage client and its builder.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::QuoteError;
use super::constants::{DEFAULT_BASE_QUERY, PLACEHOLDER_API_KEYS, REQUEST_TIMEOUT};

/// Handle to the upstream quote provider.
///
/// Holds the HTTP client, the query endpoint and the API credential. Cheap to
/// clone; the process shares one instance across all in-flight requests and
/// never mutates it after construction.
#[derive(Debug, Clone)]
pub struct AlphaClient {
    http: Client,
    base_query: Url,
    api_key: String,
}

impl AlphaClient {
    /// Create a new builder.
    pub fn builder() -> AlphaClientBuilder {
        AlphaClientBuilder::default()
    }

    /* -------- internal getters used by the fetch module -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_query(&self) -> &Url {
        &self.base_query
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether the configured credential is absent or an obvious placeholder.
    ///
    /// Checked per request, not at startup: like the original deployment, the
    /// process runs without a key and reports the problem on each quote call.
    pub fn key_is_unconfigured(&self) -> bool {
        let key = self.api_key.trim();
        key.is_empty() || PLACEHOLDER_API_KEYS.iter().any(|p| key.eq_ignore_ascii_case(p))
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`AlphaClient`].
#[derive(Debug, Default)]
pub struct AlphaClientBuilder {
    api_key: Option<String>,
    base_query: Option<Url>,
    timeout: Option<Duration>,
}

impl AlphaClientBuilder {
    /// Set the Alpha Vantage API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the query endpoint (useful for tests).
    pub fn base_query(mut self, base: Url) -> Self {
        self.base_query = Some(base);
        self
    }

    /// Override the outbound request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AlphaClient, QuoteError> {
        let base_query = match self.base_query {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUERY)?,
        };
        let http = Client::builder()
            .timeout(self.timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()?;
        Ok(AlphaClient {
            http,
            base_query,
            api_key: self.api_key.unwrap_or_default(),
        })
    }
}
