//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COURSE_PORTAL` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working
//! development configuration.
//!
//! # Example
//!
//! ```no_run
//! use course_portal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend at {}", config.api.base_url);
//! ```

mod api;
mod client;
mod error;
mod storage;

pub use api::ApiConfig;
pub use client::{ClientConfig, Environment, LogFormat};
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Course backend (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,

    /// Persisted session storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Environment and logging
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COURSE_PORTAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COURSE_PORTAL__API__BASE_URL=https://...` -> `api.base_url = ...`
    /// - `COURSE_PORTAL__CLIENT__LOG_FORMAT=json` -> `client.log_format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COURSE_PORTAL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate(&self.client.environment)?;
        self.storage.validate()?;
        self.client.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.client.is_production()
    }
}
