//! Client configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `POSTBOARD` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use postboard_client::config::ClientConfig;
//!
//! let config = ClientConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod error;
mod logging;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root client configuration
///
/// Every section has defaults, so an empty environment yields a client
/// pointed at a local development server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// API connection (base URL, timeout, redirects)
    #[serde(default)]
    pub api: ApiConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `POSTBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `POSTBOARD__API__BASE_URL=https://...` -> `api.base_url = ...`
    /// - `POSTBOARD__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("POSTBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
