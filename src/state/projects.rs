//! Project list state container.
//!
//! Two operations share the container: a wholesale list fetch and a single
//! create. A failed fetch clears the list instead of preserving stale data;
//! a failed create leaves the list untouched.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::lifecycle::OpState;
use crate::net::CopperApi;
use crate::net::types::{CreateProjectDto, Project};

// =============================================================================
// STATE
// =============================================================================

/// Projects in server-defined order plus the lifecycle of each operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    pub list: OpState<()>,
    pub create: OpState<()>,
}

impl ProjectsState {
    /// True while a list fetch is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.list.is_pending()
    }

    #[must_use]
    pub fn create_error(&self) -> Option<&str> {
        self.create.error()
    }

    pub fn list_pending(&mut self) {
        self.list.begin();
    }

    /// Replace the collection wholesale; no merging with previous contents.
    pub fn list_fulfilled(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.list = OpState::Fulfilled(());
    }

    /// A failed fetch empties the list rather than keeping stale entries.
    pub fn list_rejected(&mut self, message: String) {
        self.projects.clear();
        self.list.reject(message);
    }

    pub fn create_pending(&mut self) {
        self.create.begin();
    }

    pub fn create_fulfilled(&mut self, project: Project) {
        self.projects.push(project);
        self.create = OpState::Fulfilled(());
    }

    pub fn create_rejected(&mut self, message: String) {
        self.create.reject(message);
    }
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Clone)]
pub struct ProjectsStore {
    api: Arc<dyn CopperApi>,
    state: Arc<RwLock<ProjectsState>>,
}

impl ProjectsStore {
    #[must_use]
    pub fn new(api: Arc<dyn CopperApi>) -> Self {
        Self { api, state: Arc::new(RwLock::new(ProjectsState::default())) }
    }

    pub async fn snapshot(&self) -> ProjectsState {
        self.state.read().await.clone()
    }

    pub async fn list_projects(&self) {
        self.state.write().await.list_pending();

        let result = self.api.list_projects().await;
        let mut state = self.state.write().await;
        match result {
            Ok(projects) => {
                info!(count = projects.len(), "projects: list fetched");
                state.list_fulfilled(projects);
            }
            Err(e) => {
                let message = e.user_message();
                warn!(error = %message, "projects: list fetch failed");
                state.list_rejected(message);
            }
        }
    }

    pub async fn create_project(&self, dto: CreateProjectDto) {
        info!(title = %dto.title, "projects: create dispatched");
        self.state.write().await.create_pending();

        let result = self.api.create_project(&dto).await;
        let mut state = self.state.write().await;
        match result {
            Ok(project) => state.create_fulfilled(project),
            Err(e) => {
                let message = e.user_message();
                warn!(error = %message, "projects: create failed");
                state.create_rejected(message);
            }
        }
    }
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
