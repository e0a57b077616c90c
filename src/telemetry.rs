//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays reserved for the rendered pages.

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{ClientConfig, LogFormat};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &ClientConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(config: &ClientConfig) -> Result<(), TelemetryError> {
    let builder = fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        let config = ClientConfig::default();
        let _ = init(&config);

        assert!(matches!(init(&config), Err(TelemetryError::Init(_))));
    }
}
