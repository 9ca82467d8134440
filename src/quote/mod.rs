//! Fetch-and-normalize for single US-equity quotes.
//!
//! One best-effort GET against the Alpha Vantage `GLOBAL_QUOTE` endpoint per
//! call: no retries, no caching. Failures are classified into
//! [`QuoteError`] variants so callers never match on message text.

use serde_json::{Map, Value};
use url::Url;

use crate::core::constants::{
    ADVISORY_KEYS, BODY_SNIPPET_CHARS, PRICE_FIELD, QUERY_FUNCTION, QUOTE_PAYLOAD_KEYS, SOURCE_TAG,
};
use crate::core::{AlphaClient, Quote, QuoteError};

/* ---------------- Public API ---------------- */

/// Fetch a single quote for `symbol` from Alpha Vantage.
///
/// The symbol is trimmed and uppercased before anything else; an empty result
/// fails with [`QuoteError::InvalidInput`] without touching the network, and
/// a missing or placeholder API key fails with [`QuoteError::Unconfigured`].
pub async fn fetch_quote(client: &AlphaClient, symbol: &str) -> Result<Quote, QuoteError> {
    let symbol = normalize_symbol(symbol)?;

    if client.key_is_unconfigured() {
        return Err(QuoteError::Unconfigured);
    }

    let url = build_query_url(client, &symbol);
    tracing::debug!(url = %redacted(&url), %symbol, "requesting upstream quote");

    let resp = client.http().get(url).send().await?;
    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(body = snippet(&body), "upstream response body");

    let quote = normalize(&symbol, &body)?;
    tracing::debug!(symbol = %quote.symbol, price = quote.price, "normalized quote");
    Ok(quote)
}

impl AlphaClient {
    /// Convenience wrapper around [`fetch_quote`].
    pub async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        fetch_quote(self, symbol).await
    }
}

/* ---------------- Internal helpers ---------------- */

fn normalize_symbol(raw: &str) -> Result<String, QuoteError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(QuoteError::InvalidInput);
    }
    Ok(symbol)
}

fn build_query_url(client: &AlphaClient, symbol: &str) -> Url {
    let mut url = client.base_query().clone();
    url.query_pairs_mut()
        .append_pair("function", QUERY_FUNCTION)
        .append_pair("symbol", symbol)
        .append_pair("apikey", client.api_key())
        .append_pair("datatype", "json");
    url
}

/// Same URL with the credential blanked, for log lines.
fn redacted(url: &Url) -> String {
    let mut copy = url.clone();
    {
        let mut qp = copy.query_pairs_mut();
        qp.clear();
        for (k, v) in url.query_pairs() {
            if k == "apikey" {
                qp.append_pair(&k, "REDACTED");
            } else {
                qp.append_pair(&k, &v);
            }
        }
    }
    copy.to_string()
}

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(BODY_SNIPPET_CHARS) {
        Some((i, _)) => &body[..i],
        None => body,
    }
}

/// Classify and reshape a raw upstream body into a [`Quote`].
///
/// A malformed or empty body is treated as an empty JSON object, so it falls
/// through to [`QuoteError::NotFound`] rather than a parse failure.
fn normalize(symbol: &str, body: &str) -> Result<Quote, QuoteError> {
    let data: Value = serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Map::new()));

    // A throttling advisory wins even when a payload is also present.
    if let Some(text) = advisory(&data) {
        return Err(QuoteError::RateLimited(text.to_string()));
    }

    let raw_price = quote_payload(&data)
        .and_then(|payload| payload.get(PRICE_FIELD))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            QuoteError::NotFound(format!(
                "no {QUERY_FUNCTION} payload with a \"{PRICE_FIELD}\" field for {symbol}"
            ))
        })?;

    let price = parse_price(raw_price)?;

    Ok(Quote {
        symbol: symbol.to_string(),
        short_name: symbol.to_string(),
        price,
        currency: "USD".to_string(),
        source: SOURCE_TAG.to_string(),
    })
}

/// First rate-limit advisory present in the body, if any.
fn advisory(data: &Value) -> Option<&str> {
    ADVISORY_KEYS
        .iter()
        .find_map(|key| data.get(key).and_then(Value::as_str))
}

/// The quote payload under either key spelling, first match wins.
fn quote_payload(data: &Value) -> Option<&Value> {
    QUOTE_PAYLOAD_KEYS.iter().find_map(|key| data.get(key))
}

fn parse_price(raw: &str) -> Result<f64, QuoteError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(QuoteError::BadUpstreamData(raw.to_string())),
    }
}

/* ---------------- Unit tests ---------------- */
