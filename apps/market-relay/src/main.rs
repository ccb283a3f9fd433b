//! Market Relay Binary
//!
//! Starts the HTTP relay in front of the Finnhub market data API.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p market-relay
//! ```
//!
//! # Environment Variables
//!
//! - `FINNHUB_API_KEY`: upstream credential (requests fail with 500 while unset)
//! - `FINNHUB_BASE_URL`: upstream base URL (default: <https://finnhub.io/api/v1>)
//! - `HTTP_PORT`: HTTP server port (default: 3000)
//! - `BIND_ADDRESS`: listener bind address (default: 0.0.0.0)
//! - `RUST_LOG`: log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use market_relay::{AppState, FinnhubClient, Settings, create_router};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("Starting market relay");

    let settings = Settings::from_env();
    log_settings(&settings);

    if settings.api_key.is_none() {
        tracing::warn!(
            "FINNHUB_API_KEY not set - upstream requests will fail until it is configured"
        );
    }

    let finnhub = FinnhubClient::new(settings.base_url.clone(), settings.api_key.clone());
    let app = create_router(AppState {
        finnhub: Arc::new(finnhub),
    });

    let addr: SocketAddr = format!("{}:{}", settings.bind_address, settings.http_port).parse()?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET /health");
    tracing::info!("  GET /api/quote?symbol=");
    tracing::info!("  GET /api/profile?symbol=");
    tracing::info!("  GET /api/news[?symbol=|?category=]");
    tracing::info!("  GET /api/search?q=");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Market relay stopped");
    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant
/// guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "market_relay=info"
                    .parse()
                    .expect("static directive 'market_relay=info' is valid"),
            ),
        )
        .init();
}

/// Log the parsed configuration. The credential itself is never logged.
fn log_settings(settings: &Settings) {
    tracing::info!(
        bind_address = %settings.bind_address,
        http_port = settings.http_port,
        base_url = %settings.base_url,
        credential_configured = settings.api_key.is_some(),
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed: a process that cannot
/// respond to termination signals should fail fast at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
