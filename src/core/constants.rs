//! Centralized constants for the Alpha Vantage boundary.

use std::time::Duration;

/// Alpha Vantage query endpoint; every request is a GET against this URL.
pub(crate) const DEFAULT_BASE_QUERY: &str = "https://www.alphavantage.co/query";

/// Provider tag stamped on every normalized quote.
pub(crate) const SOURCE_TAG: &str = "Alpha Vantage";

/// The endpoint function we request; always the single-symbol snapshot.
pub(crate) const QUERY_FUNCTION: &str = "GLOBAL_QUOTE";

/// Candidate keys for the quote payload, probed in order. Alpha Vantage is
/// inconsistent between the space-separated and underscore-separated spelling.
pub(crate) const QUOTE_PAYLOAD_KEYS: &[&str] = &["Global Quote", "Global_Quote"];

/// Keys that carry a rate-limit advisory instead of data, probed in order.
pub(crate) const ADVISORY_KEYS: &[&str] = &["Note", "Information"];

/// Price field inside the quote payload.
pub(crate) const PRICE_FIELD: &str = "05. price";

/// Key values that mean "nobody configured a real credential yet".
pub(crate) const PLACEHOLDER_API_KEYS: &[&str] = &["YOUR_API_KEY", "REPLACE_ME"];

/// Fixed timeout for the single outbound call; there are no retries.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How much of the raw upstream body gets logged at debug level.
pub(crate) const BODY_SNIPPET_CHARS: usize = 256;
