//! portfolio-quotes: a stateless HTTP proxy for Alpha Vantage US-equity
//! quotes, backing a personal portfolio tracker front-end.
//!
//! The whole system is one operation: validate a symbol, make one outbound
//! call to Alpha Vantage, reshape the JSON, return a normalized [`Quote`] or
//! a classified [`QuoteError`]. Italian holdings are priced manually on the
//! client and never reach this backend.

pub mod core;
pub mod quote;
pub mod server;

pub use crate::core::{AlphaClient, AlphaClientBuilder, Quote, QuoteError};
pub use crate::quote::fetch_quote;
pub use crate::server::{ServerConfig, router};
