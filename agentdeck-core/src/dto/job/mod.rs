//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::AgentType;
use crate::schema::{SchemaError, Validate};

/// Step budget used when the caller does not pick one
pub const DEFAULT_MAX_STEPS: u32 = 20;

/// Request to start a new agent run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    pub prompt: String,
    pub agent_type: AgentType,
    pub max_steps: u32,
}

impl JobRequest {
    /// Creates a request for the default agent with the default step budget
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            agent_type: AgentType::default(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_agent_type(mut self, agent_type: AgentType) -> Self {
        self.agent_type = agent_type;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Validate for JobRequest {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.prompt.trim().is_empty() {
            return Err(SchemaError::EmptyField("prompt"));
        }
        if self.max_steps == 0 {
            return Err(SchemaError::NotPositive("max_steps"));
        }
        Ok(())
    }
}
