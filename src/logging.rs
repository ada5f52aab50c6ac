//! Logging configuration and initialization.
//!
//! The orchestrator itself only talks to `tracing`; host binaries call
//! [`LoggingConfig::init`] once at startup to pick the output format.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Output shape of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable console output.
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `"info"` or `"drainpipe=debug"`.
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// `RUST_LOG` wins over the configured level when set.
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Initialize the global tracing subscriber with this configuration.
    pub fn init(&self) {
        match self.format {
            LogFormat::Json => fmt().json().with_env_filter(self.filter()).init(),
            LogFormat::Pretty => fmt().with_env_filter(self.filter()).init(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}
