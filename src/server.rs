//! HTTP server startup with graceful shutdown.

use std::net::SocketAddr;

use axum::Router;

use crate::error::ServerError;
use crate::signal;

/// Start the HTTP server and block until it shuts down.
///
/// Binds the listener, then serves until an interrupt signal arrives, at
/// which point in-flight requests are drained before returning.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when an interrupt signal is received, logging the shutdown.
async fn shutdown_signal() {
    match signal::interrupt().await {
        Ok(()) => tracing::info!("Received interrupt, initiating graceful shutdown"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
