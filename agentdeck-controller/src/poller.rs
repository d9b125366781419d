//! Status poller
//!
//! Checks the active job on a fixed interval until it reaches a terminal
//! status, fails, or the controller moves on. One status request is in
//! flight at a time: the next tick is not awaited until the previous
//! response has been applied.

use std::sync::Arc;

use agentdeck_client::{AgentApi, ClientError};
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::controller::Shared;
use crate::state::JobEvent;

/// Delay between status checks
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Polls `job_id` until it finishes or `generation` goes stale
///
/// The first check happens one interval after the job was submitted.
pub(crate) async fn poll_job(
    api: Arc<dyn AgentApi>,
    shared: Arc<Shared>,
    job_id: String,
    generation: u64,
) {
    let mut ticker = time::interval_at(Instant::now() + POLL_INTERVAL, POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        debug!("Polling status of job {}", job_id);
        let outcome = api.job_status(&job_id).await;

        let mut lc = shared.lock();
        if lc.generation != generation {
            debug!("Discarding stale status response for job {}", job_id);
            return;
        }

        // A body naming another job counts as malformed.
        let outcome = outcome.and_then(|job| {
            if job.id == job_id {
                Ok(job)
            } else {
                Err(ClientError::Decode(format!(
                    "status response names job {} instead of {}",
                    job.id, job_id
                )))
            }
        });

        match outcome {
            Ok(job) if job.is_terminal() => {
                shared.archive(&mut lc, job);
                return;
            }
            Ok(job) => {
                debug!("Job {} still running ({} steps)", job.id, job.steps.len());
                shared.replace_current(job);
            }
            Err(e) => {
                warn!("Failed to get status of job {}: {}", job_id, e);
                shared.reset_to_idle(&mut lc);
                shared.emit(JobEvent::PollFailed {
                    job_id,
                    error: Arc::new(e),
                });
                return;
            }
        }
    }
}
