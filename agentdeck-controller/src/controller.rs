//! Job lifecycle controller
//!
//! Drives at most one agent run from submission to a terminal status and
//! keeps the append-only history of finished runs. All observable state is
//! published through `watch` channels so a presentation layer can follow
//! along without polling the controller.

use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use agentdeck_client::AgentApi;
use agentdeck_core::domain::job::{Job, JobStatus};
use agentdeck_core::domain::repository::Repository;
use agentdeck_core::dto::job::JobRequest;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::{ControllerError, Result};
use crate::poller;
use crate::state::{ControllerState, JobEvent};

const EVENT_CAPACITY: usize = 64;

/// Mutable lifecycle bookkeeping, guarded by `Shared::lifecycle`
pub(crate) struct Lifecycle {
    pub(crate) state: ControllerState,
    /// Id of the job being polled or stopped
    pub(crate) job_id: Option<String>,
    /// Bumped every time the controller leaves Polling/Stopping
    pub(crate) generation: u64,
    pub(crate) poll_task: Option<JoinHandle<()>>,
}

/// State shared between the controller and its poll task
pub(crate) struct Shared {
    lifecycle: Mutex<Lifecycle>,
    state: watch::Sender<ControllerState>,
    current_job: watch::Sender<Option<Job>>,
    history: watch::Sender<Vec<Job>>,
    events: broadcast::Sender<JobEvent>,
}

impl Shared {
    fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            lifecycle: Mutex::new(Lifecycle {
                state: ControllerState::Idle,
                job_id: None,
                generation: 0,
                poll_task: None,
            }),
            state: watch::Sender::new(ControllerState::Idle),
            current_job: watch::Sender::new(None),
            history: watch::Sender::new(Vec::new()),
            events,
        }
    }

    /// The guard must never be held across an `.await`
    pub(crate) fn lock(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, lc: &mut Lifecycle, state: ControllerState) {
        lc.state = state;
        self.state.send_replace(state);
    }

    pub(crate) fn emit(&self, event: JobEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    pub(crate) fn replace_current(&self, job: Job) {
        self.current_job.send_replace(Some(job));
    }

    /// Drops the active job without archiving it and returns to Idle
    pub(crate) fn reset_to_idle(&self, lc: &mut Lifecycle) {
        lc.generation += 1;
        lc.job_id = None;
        if let Some(task) = lc.poll_task.take() {
            task.abort();
        }
        self.current_job.send_replace(None);
        self.set_state(lc, ControllerState::Idle);
    }

    /// Appends a terminal job to history and returns to Idle
    pub(crate) fn archive(&self, lc: &mut Lifecycle, job: Job) {
        info!("Job {} finished with status {}", job.id, job.status);

        self.history.send_modify(|history| history.push(job.clone()));
        self.reset_to_idle(lc);

        match job.status {
            JobStatus::Error => self.emit(JobEvent::Failed(job)),
            _ => self.emit(JobEvent::Completed(job)),
        }
    }
}

/// Resets a submission left behind by a dropped `run_job` future
struct SubmitGuard<'a> {
    shared: &'a Shared,
    armed: bool,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut lc = self.shared.lock();
        if lc.state == ControllerState::Submitting {
            warn!("Submission abandoned before the backend answered");
            self.shared.reset_to_idle(&mut lc);
        }
    }
}

/// Owns the lifecycle of one agent run at a time
///
/// Construct one per consumer and pass it by reference; there is no global
/// instance. Dropping the controller stops any polling in progress.
pub struct JobController {
    pub(crate) api: Arc<dyn AgentApi>,
    pub(crate) shared: Arc<Shared>,
    pub(crate) repositories: watch::Sender<Vec<Repository>>,
    pub(crate) current_repository: watch::Sender<Option<Repository>>,
    pub(crate) connected: watch::Sender<bool>,
    /// True while a repository refresh or import is outstanding
    pub(crate) loading: watch::Sender<bool>,
    pub(crate) pending_loads: AtomicUsize,
}

impl JobController {
    /// Creates an idle controller backed by `api`
    pub fn new(api: Arc<dyn AgentApi>) -> Self {
        Self {
            api,
            shared: Arc::new(Shared::new()),
            repositories: watch::Sender::new(Vec::new()),
            current_repository: watch::Sender::new(None),
            connected: watch::Sender::new(false),
            loading: watch::Sender::new(false),
            pending_loads: AtomicUsize::new(0),
        }
    }

    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submits a job and starts polling it if the backend reports it running
    ///
    /// Returns the job as first reported by the backend. A job that is
    /// already terminal is archived before this returns. Fails with `Busy`
    /// if another job is being submitted, polled or stopped; the active job
    /// is left untouched in that case.
    pub async fn run_job(&self, request: JobRequest) -> Result<Job> {
        {
            let mut lc = self.shared.lock();
            if !lc.state.is_idle() {
                warn!("Rejecting job submission: controller is {:?}", lc.state);
                return Err(ControllerError::Busy);
            }
            self.shared.set_state(&mut lc, ControllerState::Submitting);
        }

        let mut guard = SubmitGuard {
            shared: &self.shared,
            armed: true,
        };
        let submitted = self.api.submit_job(&request).await;
        guard.armed = false;

        let mut lc = self.shared.lock();
        let job = match submitted {
            Ok(job) => job,
            Err(e) => {
                warn!("Job submission failed: {}", e);
                self.shared.reset_to_idle(&mut lc);
                return Err(e.into());
            }
        };

        if job.is_terminal() {
            self.shared.archive(&mut lc, job.clone());
            return Ok(job);
        }

        info!("Job {} is running, polling for status", job.id);
        lc.job_id = Some(job.id.clone());
        self.shared.replace_current(job.clone());
        self.shared.set_state(&mut lc, ControllerState::Polling);
        let generation = lc.generation;
        lc.poll_task = Some(tokio::spawn(poller::poll_job(
            Arc::clone(&self.api),
            Arc::clone(&self.shared),
            job.id.clone(),
            generation,
        )));
        self.shared.emit(JobEvent::Started(job.clone()));

        Ok(job)
    }

    /// Asks the backend to stop the active job
    ///
    /// A no-op unless a job is being polled. On success polling stops and the
    /// job's last known state is discarded without being archived. If the
    /// stop request fails the controller goes back to polling so the caller
    /// can try again.
    pub async fn stop_job(&self) -> Result<()> {
        let (job_id, generation) = {
            let mut lc = self.shared.lock();
            if lc.state != ControllerState::Polling {
                return Ok(());
            }
            let Some(job_id) = lc.job_id.clone() else {
                return Ok(());
            };
            self.shared.set_state(&mut lc, ControllerState::Stopping);
            (job_id, lc.generation)
        };

        info!("Stopping job {}", job_id);
        let cancelled = self.api.cancel_job(&job_id).await;

        let mut lc = self.shared.lock();
        let still_ours = lc.generation == generation;

        match cancelled {
            Ok(()) => {
                if still_ours {
                    self.shared.reset_to_idle(&mut lc);
                    self.shared.emit(JobEvent::Stopped { job_id });
                }
                Ok(())
            }
            Err(e) => {
                warn!("Failed to stop job {}: {}", job_id, e);
                if still_ours {
                    self.shared.set_state(&mut lc, ControllerState::Polling);
                }
                Err(ControllerError::RemoteCancelFailed(e))
            }
        }
    }

    // =============================================================================
    // Observers
    // =============================================================================

    pub fn state(&self) -> ControllerState {
        *self.shared.state.borrow()
    }

    pub fn watch_state(&self) -> watch::Receiver<ControllerState> {
        self.shared.state.subscribe()
    }

    /// True while a job is being submitted, polled or stopped
    pub fn is_running(&self) -> bool {
        !self.state().is_idle()
    }

    /// The most recent submission or poll response for the active job
    pub fn current_job(&self) -> Option<Job> {
        self.shared.current_job.borrow().clone()
    }

    pub fn watch_current_job(&self) -> watch::Receiver<Option<Job>> {
        self.shared.current_job.subscribe()
    }

    /// Finished jobs, oldest first
    pub fn history(&self) -> Vec<Job> {
        self.shared.history.borrow().clone()
    }

    pub fn watch_history(&self) -> watch::Receiver<Vec<Job>> {
        self.shared.history.subscribe()
    }

    /// Subscribes to lifecycle events raised after this call
    pub fn subscribe(&self) -> broadcast::Receiver<JobEvent> {
        self.shared.events.subscribe()
    }
}

impl Drop for JobController {
    fn drop(&mut self) {
        let mut lc = self.shared.lock();
        lc.generation += 1;
        if let Some(task) = lc.poll_task.take() {
            task.abort();
        }
    }
}
