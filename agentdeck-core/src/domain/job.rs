//! Job domain types

use serde::{Deserialize, Serialize};

use crate::schema::{SchemaError, Validate};

/// One remote agent invocation
///
/// The backend assigns the id on submission and reports the whole record on
/// every status check, so the client replaces it wholesale instead of
/// patching fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub steps: Vec<StepRecord>,
}

impl Job {
    /// Returns true once no further transitions can occur
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Validate for Job {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.id.trim().is_empty() {
            return Err(SchemaError::EmptyField("id"));
        }

        let status = self.status.as_str();
        match self.status {
            JobStatus::Running => {
                if self.result.is_some() {
                    return Err(SchemaError::UnexpectedField {
                        field: "result",
                        status,
                    });
                }
                if self.error.is_some() {
                    return Err(SchemaError::UnexpectedField {
                        field: "error",
                        status,
                    });
                }
            }
            JobStatus::Completed => {
                if self.result.is_none() {
                    return Err(SchemaError::MissingField {
                        field: "result",
                        status,
                    });
                }
                if self.error.is_some() {
                    return Err(SchemaError::UnexpectedField {
                        field: "error",
                        status,
                    });
                }
            }
            JobStatus::Error => {
                if self.error.is_none() {
                    return Err(SchemaError::MissingField {
                        field: "error",
                        status,
                    });
                }
                if self.result.is_some() {
                    return Err(SchemaError::UnexpectedField {
                        field: "result",
                        status,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Job execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Running,
    Completed,
    Error,
}

impl JobStatus {
    /// Completed and Error are terminal
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Error)
    }

    /// Wire name of the status
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Running => "running",
            JobStatus::Completed => "completed",
            JobStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of progress reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u32,
    pub action: String,
    pub result: String,
    /// Opaque, never parsed
    pub timestamp: String,
}

/// Kind of agent the backend should run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentType {
    /// General-purpose agent
    #[default]
    #[serde(rename = "manus")]
    Default,

    /// Web automation agent
    #[serde(rename = "browser")]
    Browser,

    /// Software engineering agent
    #[serde(rename = "swe")]
    Code,

    /// Data processing and analysis agent
    #[serde(rename = "data_analysis")]
    Data,
}
