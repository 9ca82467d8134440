//! Core components of the quote proxy.
//!
//! This module contains the foundational building blocks:
//! - The upstream [`AlphaClient`] and its builder.
//! - The primary [`QuoteError`] type.
//! - The normalized [`Quote`] record.
//! - Named constants for the Alpha Vantage wire contract.

/// The upstream client (`AlphaClient`), builder, and configuration.
pub mod client;
pub(crate) mod constants;
/// The primary error type (`QuoteError`) for the crate.
pub mod error;
/// The normalized quote record returned to callers.
pub mod models;

// convenient re-exports so most code can just `use crate::core::AlphaClient`
pub use client::{AlphaClient, AlphaClientBuilder};
pub use error::QuoteError;
pub use models::Quote;
