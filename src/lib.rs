//! Test fixtures for pdeploy deployment testing.
//!
//! Two independent processes with no algorithmic core, built to "exist and
//! respond" so a deployment harness has something real to deploy and probe:
//!
//! - `bot-app`: a heartbeat bot that logs a counter every 10 seconds until
//!   interrupted.
//! - `web-app`: a status server on port 8080 with a static home page and two
//!   JSON probe endpoints.

pub mod clock;
pub mod config;
pub mod error;
pub mod heartbeat;
pub mod logging;
pub mod routes;
pub mod server;
pub mod signal;
