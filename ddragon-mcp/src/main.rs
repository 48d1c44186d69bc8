use tracing::{error, info};

mod config;
mod error;
mod mcp;
mod tools;

use crate::error::ServiceResult;
use crate::mcp::McpState;
use crate::tools::DataDragonClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    init_logging();

    info!("Starting ddragon-mcp v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!(code = e.error_code(), error = %e, "Server stopped with error");
        return Err(e.into());
    }

    info!("Shutting down");
    Ok(())
}

async fn run() -> ServiceResult<()> {
    let config = crate::config::load_config()?;
    info!(
        base_url = %config.data_dragon.base_url,
        version = %config.data_dragon.version,
        locale = %config.data_dragon.locale,
        timeout_secs = config.data_dragon.timeout_secs,
        "Configuration loaded"
    );

    let client = DataDragonClient::from_config(&config.data_dragon)?;
    let state = McpState::new(client, config.server);

    mcp::serve_stdio(&state).await
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let format = fmt::format().with_target(true).compact();

    // stdout carries the protocol, so logs go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ddragon_mcp=info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
