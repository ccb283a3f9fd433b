//! Relay configuration, loaded from environment variables.
//!
//! The upstream credential is optional at startup: when `FINNHUB_API_KEY`
//! is unset, the process still serves traffic and each upstream call
//! fails with a per-request error instead of crashing the server.

use std::env;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 3000;

/// Default listener bind address.
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default upstream API base URL.
const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Relay server settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Listener bind address (`BIND_ADDRESS`).
    pub bind_address: String,
    /// HTTP server port (`HTTP_PORT`).
    pub http_port: u16,
    /// Upstream API base URL (`FINNHUB_BASE_URL`).
    pub base_url: String,
    /// Upstream credential (`FINNHUB_API_KEY`). `None` when unset or empty.
    pub api_key: Option<String>,
}

impl Settings {
    /// Load settings from environment variables, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let http_port = env::var("HTTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);
        let base_url =
            env::var("FINNHUB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var("FINNHUB_API_KEY").ok().filter(|key| !key.is_empty());

        Self {
            bind_address,
            http_port,
            base_url,
            api_key,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.http_port, 3000);
        assert_eq!(settings.bind_address, "0.0.0.0");
        assert_eq!(settings.base_url, "https://finnhub.io/api/v1");
        assert!(settings.api_key.is_none());
    }
}
