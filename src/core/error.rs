use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Callers branch on the variant, never on the message text.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The symbol was empty after trimming. No network call is made.
    #[error("symbol must not be empty")]
    InvalidInput,

    /// The Alpha Vantage API key is missing or still a placeholder value.
    #[error("Alpha Vantage API key is not configured")]
    Unconfigured,

    /// A network error or timeout occurred reaching the provider.
    #[error("upstream request failed: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    /// The provider reported call-frequency or daily-quota throttling.
    /// Carries the advisory text verbatim.
    #[error("rate limited by provider: {0}")]
    RateLimited(String),

    /// The provider responded but no recognizable quote payload or price
    /// field was present.
    #[error("no quote found: {0}")]
    NotFound(String),

    /// The price field was present but did not parse to a finite number.
    #[error("upstream price is not a valid number: {0}")]
    BadUpstreamData(String),

    /// The caller requested a market other than US. Rejected before any
    /// upstream call.
    #[error("unsupported market: {0}")]
    UnsupportedMarket(String),

    /// A provided base URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
