// file: src/logging/logger.rs
// version: 1.0.0
// guid: 6f2c8a5e-9b37-4d14-b6a2-0e8c4f1a9d3b

//! Logger initialization and configuration

use crate::error::{Result, WrapperError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable consulted for a log filter before the configured level
pub const LOG_ENV: &str = "PROS_SKETCHY_LOG";

/// Initialize the logging system.
///
/// Everything goes to stderr: stdout belongs to the delegate and must reach
/// the caller byte-identical.
pub fn init_logger(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| WrapperError::config(format!("Invalid log level {}: {}", level, e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| WrapperError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}
