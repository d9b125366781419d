//! Repository DTOs

use serde::{Deserialize, Serialize};

/// Request to import a repository by URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRepository {
    pub url: String,
}
