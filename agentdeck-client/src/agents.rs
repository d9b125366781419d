//! Agent run endpoints

use crate::AgentClient;
use crate::error::{ClientError, Result};
use agentdeck_core::Validate;
use agentdeck_core::domain::job::Job;
use agentdeck_core::dto::job::JobRequest;
use reqwest::Method;

impl AgentClient {
    // =============================================================================
    // Agent Lifecycle
    // =============================================================================

    /// Submit a new agent run
    ///
    /// The request is checked locally first: an empty prompt or a zero step
    /// budget fails with `InvalidRequest` without touching the network.
    ///
    /// # Example
    /// ```no_run
    /// # use agentdeck_client::AgentClient;
    /// # use agentdeck_core::domain::job::AgentType;
    /// # use agentdeck_core::dto::job::JobRequest;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = AgentClient::new("http://localhost:8000");
    /// let request = JobRequest::new("scrape the changelog").with_agent_type(AgentType::Browser);
    /// let job = client.submit_job(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_job(&self, req: &JobRequest) -> Result<Job> {
        req.validate()
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;

        let response = self
            .request(Method::POST, "/api/agent/run")
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get the current state of a job
    ///
    /// An unknown id comes back as `ApiError` with status 404.
    pub async fn job_status(&self, job_id: &str) -> Result<Job> {
        let path = format!("/api/agent/{}/status", urlencoding::encode(job_id));
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// Ask the backend to stop a job
    ///
    /// Best-effort on the remote side: success only means the request was
    /// accepted.
    pub async fn cancel_job(&self, job_id: &str) -> Result<()> {
        let path = format!("/api/agent/{}/stop", urlencoding::encode(job_id));
        let response = self.request(Method::POST, &path).send().await?;

        self.handle_empty_response(response).await
    }
}
