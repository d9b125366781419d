//! Agentdeck HTTP Client
//!
//! A small, type-safe HTTP client for the agent backend API.
//!
//! Every call is independent: no retries, no caching, no session. Responses
//! are decoded into `agentdeck_core` types and checked against their schema
//! before being handed back, so callers never see a half-valid record.
//!
//! # Example
//!
//! ```no_run
//! use agentdeck_client::AgentClient;
//! use agentdeck_core::dto::job::JobRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AgentClient::new("http://localhost:8000");
//!
//!     let job = client.submit_job(&JobRequest::new("list open issues")).await?;
//!     println!("Started job {} ({})", job.id, job.status);
//!     Ok(())
//! }
//! ```

mod agents;
mod api;
pub mod config;
pub mod error;
mod health;
mod repositories;
mod templates;

// Re-export commonly used types
pub use api::AgentApi;
pub use config::ClientConfig;
pub use error::{ClientError, Result};

use agentdeck_core::Validate;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for the agent backend API
///
/// Methods are grouped by resource:
/// - Agent runs (submit, status, cancel)
/// - Repositories (import, list, get)
/// - Templates and health
#[derive(Clone)]
pub struct AgentClient {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    base_url: String,
    /// Bearer credential, if configured
    api_key: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for AgentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AgentClient {
    /// Create a new client with no credential
    ///
    /// # Example
    /// ```
    /// use agentdeck_client::AgentClient;
    ///
    /// let client = AgentClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            client,
        }
    }

    /// Build a client from a validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let mut this = Self::with_client(config.base_url.clone(), client);
        this.api_key = config.api_key.clone();
        Ok(this)
    }

    /// Attach a bearer credential to every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Building
    // =============================================================================

    /// Start a request against `path` with the common headers applied
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response, decode JSON and validate its shape
    ///
    /// Non-success statuses become `ApiError`; bodies that fail to decode or
    /// break a schema rule become `Decode`.
    async fn handle_response<T: DeserializeOwned + Validate>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let value: T = self.handle_json_response(response).await?;
        value.validate()?;

        Ok(value)
    }

    /// Handle an API response and decode JSON without schema checks
    async fn handle_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ClientError::Decode(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is ignored
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
