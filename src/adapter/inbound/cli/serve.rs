//! Handler for the `serve` command.

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::http;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Execute the serve command.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let mut config = Config::load_or_default(args.config_path())?;
    args.apply(&mut config)?;

    config.init_logging();
    info!("todolist starting");

    let state = bootstrap::build_state(&config)?;
    let listener = TcpListener::bind(config.server.address()).await?;
    info!(address = %listener.local_addr()?, "Server is running");

    http::serve(listener, state, shutdown_signal()).await?;

    info!("todolist stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
