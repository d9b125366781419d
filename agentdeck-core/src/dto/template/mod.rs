//! Template DTOs

use serde::{Deserialize, Serialize};

use crate::schema::{SchemaError, Validate};

/// Request to scaffold a project from a quick-start template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFromTemplate {
    pub template_id: String,
    pub name: String,
}

impl Validate for CreateFromTemplate {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.template_id.trim().is_empty() {
            return Err(SchemaError::EmptyField("templateId"));
        }
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptyField("name"));
        }
        Ok(())
    }
}
