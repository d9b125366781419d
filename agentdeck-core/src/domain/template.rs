//! Quick-start template descriptors

use serde::{Deserialize, Serialize};

use crate::schema::{SchemaError, Validate};

/// A starter project the backend can scaffold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub difficulty: Difficulty,
    /// Free-form estimate such as "10 min"
    pub estimated_time: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Validate for Template {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.id.trim().is_empty() {
            return Err(SchemaError::EmptyField("id"));
        }
        Ok(())
    }
}
