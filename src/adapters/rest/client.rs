use reqwest::{Client, Response};
use std::time::Duration;

use super::dto::ErrorBody;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for talking to the course backend.
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// Base URL of the backend (e.g. "http://localhost:3000").
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl RestClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct RestClient {
    config: RestClientConfig,
    http: Client,
}

impl RestClient {
    /// Builds the underlying HTTP client with the configured timeout.
    pub fn new(config: RestClientConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Joins an absolute endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Describes a failed send in a short, user-presentable way.
    pub fn describe_transport_error(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!(
                "request timed out after {}s",
                self.config.timeout.as_secs()
            )
        } else if error.is_connect() {
            format!("connection to {} failed", self.config.base_url)
        } else {
            error.to_string()
        }
    }

    /// Reads the `error` field of a rejected response.
    ///
    /// The body may be empty, not JSON, or JSON without the field; all of
    /// those yield `None`.
    pub async fn error_message(response: Response) -> Option<String> {
        let body = response.text().await.ok()?;
        ErrorBody::parse_lenient(&body)
    }
}
