//! Client configuration
//!
//! Connection settings for the agent backend: where it lives, how to
//! authenticate, and how long a single request may take.

use std::time::Duration;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Bearer token attached to every request when set
    pub api_key: Option<String>,

    /// Per-request timeout enforced by the HTTP client
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for the given backend with no credential
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            request_timeout: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - AGENTDECK_BASE_URL (optional, default: http://localhost:8000)
    /// - AGENTDECK_API_KEY (optional)
    /// - AGENTDECK_REQUEST_TIMEOUT (optional, seconds)
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            std::env::var("AGENTDECK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_key = std::env::var("AGENTDECK_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let request_timeout = match std::env::var("AGENTDECK_REQUEST_TIMEOUT") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    anyhow::anyhow!("AGENTDECK_REQUEST_TIMEOUT must be a number of seconds")
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let config = Self {
            base_url,
            api_key,
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
