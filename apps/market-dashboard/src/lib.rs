// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)
)]

//! Market Dashboard - client-side orchestration for the market relay.
//!
//! Drives the dashboard session: on every symbol change the controller
//! fetches quote, profile, and news in parallel and folds the outcome
//! into a single session phase; keystrokes in the search field feed a
//! debounced symbol-suggestion flow. Rendering is a pure function of the
//! session snapshot.
//!
//! # Layers
//!
//! - [`models`]: wire models for the relay's JSON payloads
//! - [`api`]: the [`MarketDataApi`] port, its HTTP adapter, and a mock
//! - [`controller`]: the session state machine
//! - [`view`]: stateless rendering of a session snapshot

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Port and adapters for the relay's market data endpoints.
pub mod api;

/// Dashboard session controller.
pub mod controller;

/// Wire models for the market data endpoints.
pub mod models;

/// Stateless rendering of the dashboard session state.
pub mod view;

pub use api::{ApiError, MarketDataApi, RelayApi};
pub use controller::{DashboardController, MarketData, Phase, SessionSnapshot};
