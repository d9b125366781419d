//! Controller error types

use agentdeck_client::ClientError;
use thiserror::Error;

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, ControllerError>;

/// Errors surfaced by the job controller
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A job is already being submitted or polled
    #[error("an agent is already running")]
    Busy,

    /// The backend call failed (transport or decode)
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The stop request itself failed; polling continues
    #[error("failed to stop agent: {0}")]
    RemoteCancelFailed(#[source] ClientError),
}

impl ControllerError {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}
