//! Backend operations consumed by the job controller
//!
//! The controller only needs a handful of endpoints. Putting them behind a
//! trait lets it be driven by a scripted backend in tests.

use async_trait::async_trait;

use crate::AgentClient;
use crate::error::Result;
use agentdeck_core::domain::job::Job;
use agentdeck_core::domain::repository::Repository;
use agentdeck_core::dto::job::JobRequest;

/// Agent backend as seen by the job controller
#[async_trait]
pub trait AgentApi: Send + Sync {
    /// Submits a new agent run
    async fn submit_job(&self, req: &JobRequest) -> Result<Job>;

    /// Fetches the current state of a job
    async fn job_status(&self, job_id: &str) -> Result<Job>;

    /// Requests that a job stop
    async fn cancel_job(&self, job_id: &str) -> Result<()>;

    /// Imports a repository by URL
    async fn import_repository(&self, url: &str) -> Result<Repository>;

    /// Lists imported repositories
    async fn list_repositories(&self) -> Result<Vec<Repository>>;

    /// Fetches one repository
    async fn get_repository(&self, repository_id: &str) -> Result<Repository>;

    /// Reports whether the backend is reachable
    async fn health_check(&self) -> bool;
}

#[async_trait]
impl AgentApi for AgentClient {
    async fn submit_job(&self, req: &JobRequest) -> Result<Job> {
        AgentClient::submit_job(self, req).await
    }

    async fn job_status(&self, job_id: &str) -> Result<Job> {
        AgentClient::job_status(self, job_id).await
    }

    async fn cancel_job(&self, job_id: &str) -> Result<()> {
        AgentClient::cancel_job(self, job_id).await
    }

    async fn import_repository(&self, url: &str) -> Result<Repository> {
        AgentClient::import_repository(self, url).await
    }

    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        AgentClient::list_repositories(self).await
    }

    async fn get_repository(&self, repository_id: &str) -> Result<Repository> {
        AgentClient::get_repository(self, repository_id).await
    }

    async fn health_check(&self) -> bool {
        AgentClient::health_check(self).await
    }
}
