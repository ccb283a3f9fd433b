// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Market Relay - HTTP proxy for the Finnhub market data API.
//!
//! A thin request-relay layer: each endpoint validates its query
//! parameters, delegates to the upstream client (which attaches the
//! server-side credential), and passes the upstream JSON body through
//! unmodified.
//!
//! # Layers
//!
//! - [`config`]: settings loaded from environment variables
//! - [`upstream`]: the Finnhub API adapter and its error taxonomy
//! - [`server`]: the Axum router and relay endpoints

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Settings loaded from environment variables.
pub mod config;

/// HTTP relay endpoints.
pub mod server;

/// Upstream market data API client.
pub mod upstream;

pub use config::Settings;
pub use server::{AppState, create_router};
pub use upstream::{FinnhubClient, FinnhubError};
