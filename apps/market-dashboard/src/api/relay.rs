//! HTTP adapter for the relay endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{ApiError, MarketDataApi};
use crate::models::{NewsItem, Profile, QuotePayload, SearchPayload};

/// HTTP client for the relay's `/api/*` endpoints.
#[derive(Debug, Clone)]
pub struct RelayApi {
    /// Relay base URL.
    base_url: String,
    /// HTTP client.
    client: Client,
}

impl RelayApi {
    /// Create an adapter for the relay at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MarketDataApi for RelayApi {
    async fn quote(&self, symbol: &str) -> Result<QuotePayload, ApiError> {
        self.get_json("/api/quote", &[("symbol", symbol)]).await
    }

    async fn profile(&self, symbol: &str) -> Result<Profile, ApiError> {
        self.get_json("/api/profile", &[("symbol", symbol)]).await
    }

    async fn company_news(&self, symbol: &str) -> Result<Vec<NewsItem>, ApiError> {
        // Company news is a JSON array; anything else (category payloads,
        // unexpected objects) normalizes to an empty list.
        let body: serde_json::Value = self.get_json("/api/news", &[("symbol", symbol)]).await?;

        match body {
            serde_json::Value::Array(items) => Ok(items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    async fn search(&self, query: &str) -> Result<SearchPayload, ApiError> {
        self.get_json("/api/search", &[("q", query)]).await
    }
}
