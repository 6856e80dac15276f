//! Test bot fixture for pdeploy testing.
//!
//! Logs a heartbeat every 10 seconds to demonstrate it's running, until
//! interrupted with Ctrl+C or SIGTERM.

use clap::Parser;

use pdeploy_fixtures::config::{HEARTBEAT_INTERVAL, HEARTBEAT_INTERVAL_SECS};
use pdeploy_fixtures::heartbeat::Heartbeat;
use pdeploy_fixtures::{logging, signal};

/// Heartbeat bot fixture for deployment testing
#[derive(Parser, Debug)]
#[command(name = "bot-app", version, about)]
struct Args {
    /// Log level filter (e.g., "pdeploy_fixtures=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_level);

    tracing::info!("Test bot started successfully!");
    tracing::info!(
        interval_secs = HEARTBEAT_INTERVAL_SECS,
        "Bot is running and will log a message every 10 seconds..."
    );

    let mut heartbeat = Heartbeat::new(HEARTBEAT_INTERVAL);
    if let Err(e) = heartbeat.run(signal::interrupt()).await {
        tracing::error!(error = %e, "Bot encountered an error");
        return Err(e.into());
    }

    Ok(())
}
