//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file, with `PORT` and `DATABASE_URL`
//! environment variables overriding the file.
//!
//! # Example
//!
//! ```no_run
//! use todolist::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Path to SQLite database file.
    ///
    /// Defaults to "todolist.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,
}

fn default_database_path() -> String {
    "todolist.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            database: default_database_path(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - An environment override is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than the file not existing.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let mut config = Self::parse_toml(&content)?;
                config.apply_env()?;
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let mut config = Self::default();
                config.apply_env()?;
                Ok(config)
            }
            Err(e) => Err(ConfigError::ReadFile(e).into()),
        }
    }

    /// Apply `PORT` and `DATABASE_URL` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or the result
    /// fails validation.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("'{port}' is not a valid port number"),
            })?;
        }
        if let Some(database) = lookup("DATABASE_URL") {
            self.database = database;
        }
        self.validate()
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "host" }.into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be 'pretty' or 'json'".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database, "todolist.db");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn full_toml_is_parsed() {
        let config = Config::parse_toml(
            r#"
database = "/var/lib/todolist/data.db"

[server]
host = "127.0.0.1"
port = 8080

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.server.address(), "127.0.0.1:8080");
        assert_eq!(config.database, "/var/lib/todolist/data.db");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn zero_port_is_rejected() {
        let result = Config::parse_toml("[server]\nport = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "port", .. }))
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = Config::parse_toml("[server\nport = 1");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn env_overrides_port_and_database() {
        let mut config = Config::default();
        config
            .apply_env_from(env(&[("PORT", "4000"), ("DATABASE_URL", "other.db")]))
            .unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.database, "other.db");
    }

    #[test]
    fn invalid_env_port_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_env_from(env(&[("PORT", "not-a-port")]));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "PORT", .. }))
        ));
    }

    #[test]
    fn empty_env_database_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_env_from(env(&[("DATABASE_URL", "")]));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "database" }))
        ));
    }

    #[test]
    fn missing_file_is_read_error_for_load() {
        let result = Config::load("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }
}
