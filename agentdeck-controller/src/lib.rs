//! Agentdeck Controller
//!
//! Client-side lifecycle of agent runs against the agent backend.
//!
//! The controller accepts one job at a time, polls it until it finishes,
//! and keeps an append-only history of finished jobs. It also owns the list
//! of imported repositories and the backend connection flag.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use agentdeck_client::{AgentClient, ClientConfig};
//! use agentdeck_controller::{JobController, JobEvent};
//! use agentdeck_core::dto::job::JobRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AgentClient::from_config(&ClientConfig::from_env()?)?;
//!     let controller = JobController::new(Arc::new(client));
//!     let mut events = controller.subscribe();
//!
//!     controller.run_job(JobRequest::new("triage open issues")).await?;
//!     while let Ok(event) = events.recv().await {
//!         if !matches!(event, JobEvent::Started(_)) {
//!             println!("{:?}", event);
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod controller;
pub mod error;
mod poller;
mod repositories;
pub mod state;

pub use controller::JobController;
pub use error::{ControllerError, Result};
pub use poller::POLL_INTERVAL;
pub use state::{ControllerState, JobEvent};
