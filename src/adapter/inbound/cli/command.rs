//! Command-line interface definitions.
//!
//! Defines the CLI structure for the todolist application using `clap`.
//! Running without a subcommand starts the server with default settings.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Multi-list todo web application
#[derive(Parser, Debug)]
#[command(name = "todolist")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the todolist CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server (default)
    Serve(ServeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `todolist check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Load and validate the configuration file
    Config(ConfigArgs),
}

/// Arguments for `todolist serve`.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Path to the TOML config file [default: config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database path
    #[arg(long)]
    pub database: Option<String>,

    /// Log level filter (e.g. info, debug, todolist=trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl ServeArgs {
    /// Config file to read.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Apply command-line overrides on top of file and environment settings.
    ///
    /// # Errors
    /// Returns an error if the resulting configuration is invalid.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(database) = &self.database {
            config.database.clone_from(database);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }
        config.validate()
    }
}

/// Arguments for `todolist check config`.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
