//! Tracing subscriber setup driven by the logging configuration.

use terranote_core::config::{LogFormat, LoggingConfig};
use terranote_core::error::{Result, TerranoteError};
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The configured level is the default filter; a `RUST_LOG` environment
/// variable takes precedence when set.
///
/// # Errors
///
/// Returns an error for an unparseable level or when a subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = config.parse_level()?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let result = match config.format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
    };

    result.map_err(|e| TerranoteError::Internal(format!("subscriber init: {}", e)))
}
