//! Backend health report

use serde::{Deserialize, Serialize};

use crate::schema::{SchemaError, Validate};

/// Body returned by the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl Validate for HealthStatus {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.status.trim().is_empty() {
            return Err(SchemaError::EmptyField("status"));
        }
        Ok(())
    }
}
