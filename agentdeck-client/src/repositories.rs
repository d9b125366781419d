//! Repository endpoints

use crate::AgentClient;
use crate::error::Result;
use agentdeck_core::domain::repository::Repository;
use agentdeck_core::dto::repository::ImportRepository;
use reqwest::Method;

impl AgentClient {
    // =============================================================================
    // Repository Management
    // =============================================================================

    /// Import a repository by URL
    ///
    /// # Returns
    /// The repository record created by the backend
    pub async fn import_repository(&self, url: &str) -> Result<Repository> {
        let response = self
            .request(Method::POST, "/api/repository/import")
            .json(&ImportRepository {
                url: url.to_string(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List all imported repositories
    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        let response = self
            .request(Method::GET, "/api/repositories")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a single repository by ID
    pub async fn get_repository(&self, repository_id: &str) -> Result<Repository> {
        let path = format!("/api/repository/{}", urlencoding::encode(repository_id));
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }
}
