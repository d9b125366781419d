//! Template endpoints

use crate::AgentClient;
use crate::error::{ClientError, Result};
use agentdeck_core::Validate;
use agentdeck_core::domain::template::Template;
use agentdeck_core::dto::template::CreateFromTemplate;
use reqwest::Method;
use serde_json::Value;

impl AgentClient {
    /// List the quick-start templates offered by the backend
    pub async fn list_templates(&self) -> Result<Vec<Template>> {
        let response = self.request(Method::GET, "/api/templates").send().await?;

        self.handle_response(response).await
    }

    /// Scaffold a new project named `name` from a template
    ///
    /// The backend's answer has no fixed shape, so it is handed back as raw
    /// JSON. A blank template id or name fails with `InvalidRequest`.
    pub async fn create_from_template(&self, template_id: &str, name: &str) -> Result<Value> {
        let req = CreateFromTemplate {
            template_id: template_id.to_string(),
            name: name.to_string(),
        };
        req.validate()
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;

        let response = self
            .request(Method::POST, "/api/template/create")
            .json(&req)
            .send()
            .await?;

        self.handle_json_response(response).await
    }
}
