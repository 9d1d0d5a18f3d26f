//! Command-line interface: argument parsing and command handlers.

pub mod check;
pub mod command;
pub mod serve;

pub use command::{CheckCommand, Cli, Commands};

use crate::error::Result;

/// Dispatch a parsed command line. No subcommand means `serve` with defaults.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Serve(args)) => serve::execute(&args).await,
        Some(Commands::Check(CheckCommand::Config(args))) => check::execute_config(&args),
        None => serve::execute(&command::ServeArgs::default()).await,
    }
}
