//! Test web application fixture for pdeploy testing.
//!
//! Serves a static home page and two JSON probe endpoints on port 8080.

use std::net::SocketAddr;

use clap::Parser;

use pdeploy_fixtures::config::{HTTP_HOST, HTTP_PORT};
use pdeploy_fixtures::logging;
use pdeploy_fixtures::routes::create_router;
use pdeploy_fixtures::server::start_server;

/// Status server fixture for deployment testing
#[derive(Parser, Debug)]
#[command(name = "web-app", version, about)]
struct Args {
    /// Log level filter (e.g., "pdeploy_fixtures=debug,tower_http=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_level);

    tracing::info!("Starting test web application...");

    let addr: SocketAddr = format!("{}:{}", HTTP_HOST, HTTP_PORT).parse()?;
    let app = create_router();

    start_server(app, addr).await?;

    Ok(())
}
