//! Repository domain model
//!
//! An external code repository that has been imported into the backend.

use serde::{Deserialize, Serialize};

use crate::schema::{SchemaError, Validate};

/// An imported code repository
///
/// Replaced wholesale on refresh; the client never edits one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Backend-assigned identifier
    pub id: String,

    /// Short display name (e.g. "tokio")
    pub name: String,

    /// Owner-qualified name (e.g. "tokio-rs/tokio")
    pub full_name: String,

    /// Canonical URL of the repository
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub is_private: bool,

    /// Primary language, when the host reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    pub stars: u64,

    pub forks: u64,

    /// Opaque timestamp string as reported by the backend
    pub updated_at: String,
}

impl Validate for Repository {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.id.trim().is_empty() {
            return Err(SchemaError::EmptyField("id"));
        }
        if self.url.trim().is_empty() {
            return Err(SchemaError::EmptyField("url"));
        }
        Ok(())
    }
}
