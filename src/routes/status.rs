//! API status endpoint.

use axum::Json;
use serde::Serialize;

use crate::clock;

/// Body of the `/api/status` response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub message: &'static str,
}

/// Status handler.
///
/// Returns a constant `running` status with a fresh timestamp, generated per
/// request so the harness can verify the process is actually serving.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running",
        timestamp: clock::now_iso8601(),
        message: "Test web app is running successfully",
    })
}
