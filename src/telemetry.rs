//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.filter` when it is set. Returns `false` if a
/// subscriber was already installed; the existing one is left in place.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let result = match config.format {
        LogFormat::Json => fmt().with_env_filter(filter).json().try_init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).try_init(),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "tracing init failed");
            false
        }
    }
}
