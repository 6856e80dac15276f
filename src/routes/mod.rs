//! HTTP route handlers for the status server.
//!
//! Three routes, all stateless: a static home page and two JSON probe
//! endpoints. Requests to undefined paths get axum's default 404 fallback.

pub mod health;
pub mod home;
pub mod status;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Creates the axum router with all routes and request tracing.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/api/status", get(status::status))
        .route("/api/health", get(health::health))
        .layer(TraceLayer::new_for_http())
}
