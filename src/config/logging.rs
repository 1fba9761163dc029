//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Log output settings consumed by [`crate::telemetry::init_tracing`]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter directive. `RUST_LOG` takes precedence when set.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "info,postboard_client=debug".to_string()
}
