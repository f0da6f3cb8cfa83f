//! Router

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{checkout, health_check};
use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/checkout", any(checkout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
