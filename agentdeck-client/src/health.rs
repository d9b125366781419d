//! Health endpoint

use crate::AgentClient;
use crate::error::Result;
use agentdeck_core::domain::health::HealthStatus;
use reqwest::Method;
use tracing::debug;

impl AgentClient {
    /// Fetch the backend health report
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.request(Method::GET, "/api/health").send().await?;

        self.handle_response(response).await
    }

    /// Returns true when the backend answers its health check
    ///
    /// Any failure, including a malformed body, collapses to `false`.
    pub async fn health_check(&self) -> bool {
        match self.health().await {
            Ok(status) => {
                debug!("Backend healthy: {} ({})", status.status, status.version);
                true
            }
            Err(e) => {
                debug!("Health check failed: {}", e);
                false
            }
        }
    }
}
