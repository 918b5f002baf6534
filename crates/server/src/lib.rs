//! banner-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod config;
mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use config::Config;

/// Shared application state passed to route handlers via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// The banner page, rendered once at startup. The document is fixed,
    /// so every response serves the same bytes.
    pub page: Arc<String>,
}

/// Build the application router.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port, and so multiple instances can coexist
/// in one process.
pub fn build_app(config: &Config) -> Router {
    let state = AppState {
        page: Arc::new(banner_core::render_page(&config.version)),
    };

    // Unregistered paths and methods fall through to axum's defaults
    // (404 and 405).
    Router::new()
        .route("/", get(routes::home::get))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
