//! Fixed constants for both fixtures.
//!
//! These fixtures intentionally have no configuration surface: no config
//! files, no environment variables beyond `RUST_LOG`. Everything a deployment
//! harness needs to know about them is a constant.

use std::time::Duration;

// =============================================================================
// Heartbeat bot
// =============================================================================

/// Seconds between heartbeat log lines
pub const HEARTBEAT_INTERVAL_SECS: u64 = 10;

/// Interval between heartbeat log lines
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(HEARTBEAT_INTERVAL_SECS);

// =============================================================================
// Status server
// =============================================================================

/// Bind address - all interfaces, so the harness can probe from outside
pub const HTTP_HOST: &str = "0.0.0.0";

/// Fixed HTTP port the harness probes
pub const HTTP_PORT: u16 = 8080;

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info";
