//! Finnhub API adapter.
//!
//! A pass-through client: one outbound GET per call, credential appended
//! as a query parameter, upstream JSON body returned unmodified. No
//! retries and no schema validation. The credential check happens per
//! call so a misconfigured deployment degrades to per-request errors
//! instead of failing at startup.

use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Errors from the Finnhub adapter.
#[derive(Debug, Error)]
pub enum FinnhubError {
    /// No credential is configured.
    #[error("FINNHUB_API_KEY is not configured")]
    MissingCredential,

    /// Upstream rejected the request with 429.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Upstream returned another non-success status.
    #[error("Finnhub API error: {status_text}")]
    Upstream {
        /// HTTP status code returned upstream.
        status: u16,
        /// Canonical reason text for the status.
        status_text: String,
    },

    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not valid JSON.
    #[error("JSON parsing error: {0}")]
    Json(String),
}

impl FinnhubError {
    /// Stable kind identifier, preserved in relay error bodies.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential => "configuration",
            Self::RateLimited => "rate_limited",
            Self::Upstream { .. } => "upstream",
            Self::Network(_) => "network",
            Self::Json(_) => "json",
        }
    }
}

impl From<reqwest::Error> for FinnhubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Finnhub API client.
#[derive(Debug, Clone)]
pub struct FinnhubClient {
    /// Base URL for API calls.
    base_url: String,
    /// Credential appended to every outbound request. Checked per call.
    api_key: Option<String>,
    /// HTTP client.
    client: Client,
}

impl FinnhubClient {
    /// Create a new client for the API at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            client: Client::new(),
        }
    }

    /// Whether a credential is configured.
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch `endpoint` with `params` and return the upstream JSON body
    /// unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`FinnhubError::MissingCredential`] when no credential is
    /// configured, [`FinnhubError::RateLimited`] on an upstream 429,
    /// [`FinnhubError::Upstream`] on any other non-success status, and
    /// [`FinnhubError::Network`] / [`FinnhubError::Json`] on transport or
    /// decode failures.
    pub async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, FinnhubError> {
        let token = self
            .api_key
            .as_deref()
            .ok_or(FinnhubError::MissingCredential)?;
        let url = format!("{}{}", self.base_url, endpoint);

        // The token never reaches the logs; only the endpoint is recorded.
        tracing::debug!(endpoint, "Forwarding upstream request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("token", token)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FinnhubError::RateLimited);
        }
        if !status.is_success() {
            return Err(FinnhubError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FinnhubError::Json(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credential() {
        let client = FinnhubClient::new("https://finnhub.io/api/v1", None);
        assert!(!client.has_credential());
    }

    #[test]
    fn test_client_with_credential() {
        let client = FinnhubClient::new("https://finnhub.io/api/v1", Some("key".to_string()));
        assert!(client.has_credential());
    }

    #[tokio::test]
    async fn test_fetch_without_credential_fails_per_call() {
        // The base URL is never dialed: the credential check comes first.
        let client = FinnhubClient::new("http://127.0.0.1:1", None);

        let err = client
            .fetch("/quote", &[("symbol", "AAPL")])
            .await
            .expect_err("fetch without credential should fail");

        assert!(matches!(err, FinnhubError::MissingCredential));
        assert_eq!(err.to_string(), "FINNHUB_API_KEY is not configured");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FinnhubError::MissingCredential.code(), "configuration");
        assert_eq!(FinnhubError::RateLimited.code(), "rate_limited");
        assert_eq!(
            FinnhubError::Upstream {
                status: 503,
                status_text: "Service Unavailable".to_string(),
            }
            .code(),
            "upstream"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FinnhubError::RateLimited.to_string(), "Rate limit exceeded");

        let err = FinnhubError::Upstream {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Finnhub API error: Service Unavailable");
    }
}
