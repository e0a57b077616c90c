//! Course backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::client::Environment;
use super::error::ValidationError;

const MAX_TIMEOUT_SECS: u64 = 120;

/// Where the course backend lives and how long to wait for it
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL, without the `/api` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate backend configuration
    ///
    /// Production requires HTTPS so tokens never travel in clear text.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingRequired("api.base_url"));
        }

        let is_https = url.starts_with("https://");
        if !is_https && !url.starts_with("http://") {
            return Err(ValidationError::InvalidBaseUrl(url.to_string()));
        }
        if *environment == Environment::Production && !is_https {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    10
}
