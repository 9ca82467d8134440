use serde::Serialize;

/// A normalized, point-in-time price record for one ticker symbol.
///
/// Constructed only after the upstream price parses to a finite number;
/// there is no partial or invalid form. Lives for a single request, never
/// cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Uppercased, trimmed ticker symbol.
    pub symbol: String,
    /// Display name; no separate lookup is performed, so this always equals
    /// `symbol`.
    pub short_name: String,
    /// Last price as reported by the provider. Always finite.
    pub price: f64,
    /// Fixed `"USD"`; only the US market is served live.
    pub currency: String,
    /// Fixed provider tag (`"Alpha Vantage"`).
    pub source: String,
}
