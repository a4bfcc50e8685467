//! Web server adapter.
//!
//! Axum router exposing the artifact retrieval sequence as a JSON API.

mod error;
mod handlers;

pub use error::WebError;
pub use handlers::*;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::ports::storage_port::StoragePort;

/// Reference-deployment fallback when the caller names no symbol.
pub const DEFAULT_SYMBOL: &str = "RGTI";

pub struct AppState {
    pub storage: Arc<dyn StoragePort>,
    pub default_symbol: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/technical-analysis", get(handlers::technical_analysis))
        .route("/healthz", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
