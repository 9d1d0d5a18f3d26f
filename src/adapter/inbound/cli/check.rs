//! Handler for the `check` commands.

use crate::adapter::inbound::cli::command::ConfigArgs;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Load and validate the configuration, printing a summary.
pub fn execute_config(args: &ConfigArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    for line in summary(&config) {
        println!("{line}");
    }
    Ok(())
}

fn summary(config: &Config) -> Vec<String> {
    vec![
        "Configuration OK".to_string(),
        format!("  listen:   {}", config.server.address()),
        format!("  database: {}", config.database),
        format!(
            "  logging:  {} ({})",
            config.logging.level, config.logging.format
        ),
    ]
}
