//! Mock market data API for testing.
//!
//! Returns scripted responses without network access. Useful for unit
//! tests and integration tests that don't require a running relay.
//! Fixtures can carry an artificial latency so tests can interleave
//! slow and fast fetch cycles deterministically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ApiError, MarketDataApi};
use crate::models::{NewsItem, Profile, QuotePayload, SearchPayload, SearchResult};

/// Scripted response set for one symbol.
#[derive(Debug, Clone, Default)]
pub struct SymbolFixture {
    /// Quote payload returned for the symbol.
    pub quote: QuotePayload,
    /// Profile returned for the symbol.
    pub profile: Profile,
    /// News returned for the symbol.
    pub news: Vec<NewsItem>,
    /// Artificial latency applied to each fetch.
    pub delay: Duration,
}

/// Mock implementation of [`MarketDataApi`] with scripted responses.
///
/// Unknown symbols resolve to an all-zero quote, mirroring the upstream
/// behavior the controller reports as "Symbol not found".
#[derive(Debug, Default)]
pub struct MockMarketDataApi {
    fixtures: Mutex<HashMap<String, SymbolFixture>>,
    search_results: Mutex<Vec<SearchResult>>,
    fail_fetches: AtomicBool,
    fail_search: AtomicBool,
    search_calls: AtomicU64,
    last_search: Mutex<Option<String>>,
}

impl MockMarketDataApi {
    /// Create an empty mock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the responses for `symbol`.
    pub fn stub_symbol(&self, symbol: &str, fixture: SymbolFixture) {
        self.fixtures.lock().insert(symbol.to_string(), fixture);
    }

    /// Script the search results returned for every query.
    pub fn stub_search(&self, results: Vec<SearchResult>) {
        *self.search_results.lock() = results;
    }

    /// Make every quote/profile/news fetch fail.
    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    /// Make every search fail.
    pub fn fail_search(&self, fail: bool) {
        self.fail_search.store(fail, Ordering::SeqCst);
    }

    /// Number of search calls observed.
    #[must_use]
    pub fn search_call_count(&self) -> u64 {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Query string of the most recent search call.
    #[must_use]
    pub fn last_search_query(&self) -> Option<String> {
        self.last_search.lock().clone()
    }

    async fn fixture_for(&self, symbol: &str) -> Result<SymbolFixture, ApiError> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(ApiError::Status { status: 500 });
        }

        let fixture = self.fixtures.lock().get(symbol).cloned().unwrap_or_default();
        if !fixture.delay.is_zero() {
            tokio::time::sleep(fixture.delay).await;
        }
        Ok(fixture)
    }
}

#[async_trait]
impl MarketDataApi for MockMarketDataApi {
    async fn quote(&self, symbol: &str) -> Result<QuotePayload, ApiError> {
        Ok(self.fixture_for(symbol).await?.quote)
    }

    async fn profile(&self, symbol: &str) -> Result<Profile, ApiError> {
        Ok(self.fixture_for(symbol).await?.profile)
    }

    async fn company_news(&self, symbol: &str) -> Result<Vec<NewsItem>, ApiError> {
        Ok(self.fixture_for(symbol).await?.news)
    }

    async fn search(&self, query: &str) -> Result<SearchPayload, ApiError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock() = Some(query.to_string());

        if self.fail_search.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("connection refused".to_string()));
        }

        let result = self.search_results.lock().clone();
        Ok(SearchPayload {
            count: result.len() as u64,
            result,
        })
    }
}
