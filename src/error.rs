use std::io;

/// Heartbeat bot error.
///
/// The loop body itself cannot fail; the only fallible operation is
/// installing and awaiting the interrupt signal. Anything other than a clean
/// interrupt is fatal - there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum HeartbeatError {
    #[error("signal handling failed: {0}")]
    Signal(#[from] io::Error),
}

/// Status server startup/serve error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
