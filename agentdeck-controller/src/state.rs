//! Observable controller state and lifecycle events

use std::sync::Arc;

use agentdeck_client::ClientError;
use agentdeck_core::domain::job::Job;

/// Where the controller is in the run/poll/stop cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControllerState {
    /// No active job
    #[default]
    Idle,
    /// A submission request is in flight
    Submitting,
    /// The active job is being polled
    Polling,
    /// A stop request is in flight; polling carries on until it succeeds
    Stopping,
}

impl ControllerState {
    pub fn is_idle(self) -> bool {
        self == ControllerState::Idle
    }
}

/// Notification raised for every job outcome
///
/// Failures that happen inside the poll task have no caller to return to,
/// so they only show up here.
#[derive(Debug, Clone)]
pub enum JobEvent {
    /// Submission succeeded and polling has started
    Started(Job),
    /// The job reached `completed` and was archived
    Completed(Job),
    /// The job reached `error` and was archived
    Failed(Job),
    /// The job was stopped on request; its last state was discarded
    Stopped { job_id: String },
    /// A status check failed; the job was dropped without archiving
    PollFailed {
        job_id: String,
        error: Arc<ClientError>,
    },
}

impl JobEvent {
    /// Id of the job the event refers to
    pub fn job_id(&self) -> &str {
        match self {
            JobEvent::Started(job) | JobEvent::Completed(job) | JobEvent::Failed(job) => &job.id,
            JobEvent::Stopped { job_id } | JobEvent::PollFailed { job_id, .. } => job_id,
        }
    }
}
