//! Health check endpoint for the deployment harness.
//!
//! A liveness probe: it only checks that the process can respond to HTTP.

use axum::Json;
use serde::Serialize;

use crate::clock;

/// Body of the `/api/health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: clock::now_iso8601(),
    })
}
