//! HTTP relay endpoints.

mod http;

pub use http::{AppState, create_router};
