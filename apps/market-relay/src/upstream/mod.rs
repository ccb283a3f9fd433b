//! Upstream market data API client.

mod finnhub;

pub use finnhub::{FinnhubClient, FinnhubError};
