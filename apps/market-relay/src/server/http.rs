//! HTTP/JSON relay endpoints.
//!
//! Four stateless handlers: quote, profile, news, and symbol search.
//! Each validates its query parameters, delegates to the Finnhub client,
//! and relays the upstream JSON body unmodified. Upstream failures are
//! flattened to a 500 with a flat message plus a `code` field naming the
//! error kind.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::upstream::{FinnhubClient, FinnhubError};

/// Trailing company-news window length, in days.
const NEWS_WINDOW_DAYS: i64 = 7;

/// News category used when the client specifies neither symbol nor category.
const DEFAULT_NEWS_CATEGORY: &str = "general";

/// Shared state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Upstream API client.
    pub finnhub: Arc<FinnhubClient>,
}

/// Create the Axum router with all endpoints.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/quote", get(quote))
        .route("/api/profile", get(profile))
        .route("/api/news", get(news))
        .route("/api/search", get(search))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct SymbolQuery {
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsQuery {
    symbol: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

/// Quote endpoint: relays `/quote` for a required symbol.
async fn quote(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let symbol = query
        .symbol
        .ok_or_else(|| ApiError::validation("Symbol is required"))?;

    tracing::info!(%symbol, "Relaying quote request");

    let body = state
        .finnhub
        .fetch("/quote", &[("symbol", symbol.as_str())])
        .await?;
    Ok(Json(body))
}

/// Profile endpoint: relays `/stock/profile2` for a required symbol.
async fn profile(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let symbol = query
        .symbol
        .ok_or_else(|| ApiError::validation("Symbol is required"))?;

    tracing::info!(%symbol, "Relaying profile request");

    let body = state
        .finnhub
        .fetch("/stock/profile2", &[("symbol", symbol.as_str())])
        .await?;
    Ok(Json(body))
}

/// News endpoint: company news over a trailing window when a symbol is
/// given, category headlines otherwise.
async fn news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Some(symbol) = query.symbol {
        let (from, to) = news_window(Utc::now().date_naive());

        tracing::info!(%symbol, %from, %to, "Relaying company news request");

        let body = state
            .finnhub
            .fetch(
                "/company-news",
                &[("symbol", symbol.as_str()), ("from", &from), ("to", &to)],
            )
            .await?;
        Ok(Json(body))
    } else {
        let category = query
            .category
            .unwrap_or_else(|| DEFAULT_NEWS_CATEGORY.to_string());

        tracing::info!(%category, "Relaying category news request");

        let body = state
            .finnhub
            .fetch("/news", &[("category", category.as_str())])
            .await?;
        Ok(Json(body))
    }
}

/// Search endpoint: relays `/search` for a required query string.
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let q = query
        .q
        .ok_or_else(|| ApiError::validation("Query is required"))?;

    tracing::info!(%q, "Relaying symbol search request");

    let body = state.finnhub.fetch("/search", &[("q", q.as_str())]).await?;
    Ok(Json(body))
}

/// Compute the trailing company-news window ending at `today`.
///
/// Returns `(from, to)` where `from` is `today` minus [`NEWS_WINDOW_DAYS`]
/// days, both formatted `YYYY-MM-DD`.
fn news_window(today: NaiveDate) -> (String, String) {
    let from = today - Duration::days(NEWS_WINDOW_DAYS);
    (
        from.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

/// API error type rendered as a JSON error body.
#[derive(Debug)]
pub enum ApiError {
    /// A required client parameter is missing.
    Validation(String),
    /// The upstream client failed.
    Upstream(FinnhubError),
}

impl ApiError {
    fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<FinnhubError> for ApiError {
    fn from(err: FinnhubError) -> Self {
        Self::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::Upstream(err) => {
                tracing::warn!(code = err.code(), error = %err, "Upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string(), "code": err.code() })),
                )
                    .into_response()
            }
        }
    }
}
