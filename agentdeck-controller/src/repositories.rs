//! Repository list and backend connection state
//!
//! Thin passthroughs to the backend that keep the controller's observable
//! copies in sync. The list is replaced wholesale on refresh and appended to
//! on import.

use std::sync::atomic::Ordering;

use agentdeck_core::domain::repository::Repository;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::controller::JobController;
use crate::error::Result;

/// Keeps the loading flag raised until every outstanding load is dropped
struct LoadingGuard<'a> {
    controller: &'a JobController,
}

impl<'a> LoadingGuard<'a> {
    fn new(controller: &'a JobController) -> Self {
        controller.loading.send_modify(|loading| {
            controller.pending_loads.fetch_add(1, Ordering::SeqCst);
            *loading = true;
        });
        Self { controller }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let controller = self.controller;
        controller.loading.send_modify(|loading| {
            *loading = controller.pending_loads.fetch_sub(1, Ordering::SeqCst) > 1;
        });
    }
}

impl JobController {
    /// Checks backend health and refreshes the repository list
    ///
    /// A failed refresh is logged but does not fail the call; the returned
    /// flag only reflects connectivity.
    pub async fn connect(&self) -> bool {
        let connected = self.check_connection().await;
        if let Err(e) = self.refresh_repositories().await {
            warn!("Failed to refresh repositories: {}", e);
        }
        connected
    }

    /// Runs the health check and records the result
    pub async fn check_connection(&self) -> bool {
        let connected = self.api.health_check().await;
        if connected != *self.connected.borrow() {
            info!(
                "Backend {}",
                if connected { "connected" } else { "disconnected" }
            );
        }
        self.connected.send_replace(connected);
        connected
    }

    /// Replaces the repository list with the backend's
    pub async fn refresh_repositories(&self) -> Result<Vec<Repository>> {
        let _loading = LoadingGuard::new(self);
        let repositories = self.api.list_repositories().await?;
        self.repositories.send_replace(repositories.clone());
        Ok(repositories)
    }

    /// Imports a repository and appends it to the list
    ///
    /// Importing the same URL twice yields two entries.
    pub async fn import_repository(&self, url: &str) -> Result<Repository> {
        let _loading = LoadingGuard::new(self);
        let repository = self.api.import_repository(url).await?;
        info!("Imported repository {}", repository.full_name);
        self.repositories
            .send_modify(|list| list.push(repository.clone()));
        Ok(repository)
    }

    /// Fetches a single repository without touching the list
    pub async fn get_repository(&self, repository_id: &str) -> Result<Repository> {
        Ok(self.api.get_repository(repository_id).await?)
    }

    /// Marks `repository` as the one the user is working with
    pub fn select_repository(&self, repository: Repository) {
        self.current_repository.send_replace(Some(repository));
    }

    pub fn repositories(&self) -> Vec<Repository> {
        self.repositories.borrow().clone()
    }

    pub fn watch_repositories(&self) -> watch::Receiver<Vec<Repository>> {
        self.repositories.subscribe()
    }

    pub fn current_repository(&self) -> Option<Repository> {
        self.current_repository.borrow().clone()
    }

    pub fn watch_current_repository(&self) -> watch::Receiver<Option<Repository>> {
        self.current_repository.subscribe()
    }

    /// Last known connectivity; false until the first check
    pub fn is_connected(&self) -> bool {
        *self.connected.borrow()
    }

    pub fn watch_connected(&self) -> watch::Receiver<bool> {
        self.connected.subscribe()
    }

    /// True while a repository refresh or import is in flight
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn watch_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }
}
