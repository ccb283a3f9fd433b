//! Market Dashboard Binary
//!
//! One-shot renderer: runs a fetch cycle for a symbol against the relay
//! and prints the dashboard.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p market-dashboard -- AAPL
//! ```
//!
//! # Environment Variables
//!
//! - `RELAY_BASE_URL`: relay server base URL (default: <http://localhost:3000>)
//! - `RUST_LOG`: log level (default: info)

use std::process::ExitCode;
use std::sync::Arc;

use market_dashboard::controller::DEFAULT_SYMBOL;
use market_dashboard::{DashboardController, Phase, RelayApi, view};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let relay_url =
        std::env::var("RELAY_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let symbol = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

    tracing::info!(%relay_url, %symbol, "Fetching dashboard data");

    let controller = DashboardController::new(Arc::new(RelayApi::new(relay_url)));
    controller.select_symbol(&symbol).await;

    let snapshot = controller.snapshot();
    print!("{}", view::render(&snapshot));

    match snapshot.phase {
        Phase::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

/// Initialize the tracing subscriber with environment filter.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "market_dashboard=info"
                    .parse()
                    .expect("static directive 'market_dashboard=info' is valid"),
            ),
        )
        .init();
}
