//! Interrupt signal handling.
//!
//! Both fixtures stop the same way: Ctrl+C anywhere, SIGTERM additionally on
//! Unix (deployment harnesses usually send SIGTERM).

use std::io;

/// Wait for an interrupt signal.
///
/// Resolves `Ok(())` when Ctrl+C or SIGTERM is received. Returns an error if
/// a signal handler cannot be installed, which callers treat as fatal.
pub async fn interrupt() -> io::Result<()> {
    #[cfg(unix)]
    {
        let mut terminate =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

        tokio::select! {
            res = tokio::signal::ctrl_c() => res?,
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    Ok(())
}
