//! Inbound HTTP surface.
//!
//! One JSON endpoint, `GET /api/quote`, as a stateless pass-through to the
//! quote fetcher, plus a static-file fallback for the front-end. Handlers
//! share a single cloned [`AlphaClient`]; concurrent requests are fully
//! independent.

mod config;

use std::path::Path;

use axum::extract::{Query, State};
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::core::{AlphaClient, QuoteError};
use crate::quote::fetch_quote;

pub use config::ServerConfig;

/// Build the application router.
///
/// Any path other than the API falls through to static files under
/// `public_dir`; if nothing matches there either, a plain-text 404 explains
/// where the front-end is expected.
pub fn router(client: AlphaClient, public_dir: impl AsRef<Path>) -> Router {
    let static_files = ServeDir::new(public_dir.as_ref())
        .append_index_html_on_directories(true)
        .not_found_service(missing_front_end.into_service());

    Router::new()
        .route("/api/quote", get(get_quote))
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .with_state(client)
}

/* ---------------- Handlers ---------------- */

#[derive(Debug, Deserialize)]
struct QuoteParams {
    symbol: Option<String>,
    market: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

async fn get_quote(
    State(client): State<AlphaClient>,
    Query(params): Query<QuoteParams>,
) -> Result<Response, QuoteError> {
    let symbol = params.symbol.as_deref().unwrap_or("").trim();
    if symbol.is_empty() {
        return Err(QuoteError::InvalidInput);
    }

    // The front-end prices Italian positions manually and only ever sends
    // market=US here; rejecting anything else is a backstop.
    let market = params.market.as_deref().unwrap_or("US");
    if !market.eq_ignore_ascii_case("US") {
        return Err(QuoteError::UnsupportedMarket(market.to_string()));
    }

    let quote = fetch_quote(&client, symbol).await?;
    tracing::info!(symbol = %quote.symbol, price = quote.price, "served quote");
    Ok(Json(quote).into_response())
}

async fn missing_front_end() -> (StatusCode, &'static str) {
    (
        StatusCode::NOT_FOUND,
        "front-end not found: place index.html in the public directory",
    )
}

/* ---------------- Error mapping ---------------- */

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            QuoteError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                "the symbol query parameter is required; pass the ticker, e.g. SYM or AAPL"
                    .to_string(),
            ),
            QuoteError::UnsupportedMarket(_) => (
                StatusCode::BAD_REQUEST,
                "only US-market quotes are served live; Italian holdings are priced manually"
                    .to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("could not fetch the US quote, check the ticker or try again later: {self}"),
            ),
        };
        tracing::warn!(status = %status, %error, "quote request failed");
        (status, Json(ErrorBody { error })).into_response()
    }
}
