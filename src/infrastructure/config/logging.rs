//! `[logging]` section: level filter and output format.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Log level directive and output format (`pretty` or `json`).
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `todolist=debug,diesel=warn`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// True when log lines should be emitted as JSON objects.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    /// Filter for the subscriber. `RUST_LOG` wins over the configured level,
    /// and an unparsable level falls back to `info`.
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Install the global tracing subscriber.
    ///
    /// Only the first call in a process takes effect.
    pub fn init(&self) {
        let builder = fmt().with_env_filter(self.filter()).with_target(true);
        let installed = if self.is_json() {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}
