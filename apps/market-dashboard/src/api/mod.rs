//! Port and adapters for the relay's market data endpoints.

pub mod mock;
mod relay;

pub use relay::RelayApi;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewsItem, Profile, QuotePayload, SearchPayload};

/// Errors from a market data fetch.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport-level failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The relay returned a non-success status.
    #[error("Request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Client-side port onto the relay's market data endpoints.
///
/// The controller depends on this trait; production code uses
/// [`RelayApi`], tests use [`mock::MockMarketDataApi`].
#[async_trait]
pub trait MarketDataApi: Send + Sync {
    /// Fetch the current quote for `symbol`.
    async fn quote(&self, symbol: &str) -> Result<QuotePayload, ApiError>;

    /// Fetch the company profile for `symbol`.
    async fn profile(&self, symbol: &str) -> Result<Profile, ApiError>;

    /// Fetch recent company news for `symbol`, upstream order preserved.
    async fn company_news(&self, symbol: &str) -> Result<Vec<NewsItem>, ApiError>;

    /// Search instruments matching `query`.
    async fn search(&self, query: &str) -> Result<SearchPayload, ApiError>;
}
