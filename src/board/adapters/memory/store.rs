//! In-memory task store for board synchronization tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{ProjectId, TaskId, TaskRecord, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store with per-call failure injection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    projects: HashMap<ProjectId, Vec<TaskRecord>>,
    update_failure: Option<TaskStoreError>,
    fetch_failure: Option<TaskStoreError>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the record set held for a project.
    ///
    /// # Errors
    ///
    /// Returns a wrapped poison error when the state lock is poisoned.
    pub fn seed_project(
        &self,
        project: ProjectId,
        records: Vec<TaskRecord>,
    ) -> TaskStoreResult<()> {
        let mut state = lock_write(&self.state)?;
        state.projects.insert(project, records);
        Ok(())
    }

    /// Makes every subsequent `update_status` call fail with the given error
    /// until cleared with `None`.
    ///
    /// # Errors
    ///
    /// Returns a wrapped poison error when the state lock is poisoned.
    pub fn set_update_failure(&self, failure: Option<TaskStoreError>) -> TaskStoreResult<()> {
        let mut state = lock_write(&self.state)?;
        state.update_failure = failure;
        Ok(())
    }

    /// Makes every subsequent `fetch_all` call fail with the given error
    /// until cleared with `None`.
    ///
    /// # Errors
    ///
    /// Returns a wrapped poison error when the state lock is poisoned.
    pub fn set_fetch_failure(&self, failure: Option<TaskStoreError>) -> TaskStoreResult<()> {
        let mut state = lock_write(&self.state)?;
        state.fetch_failure = failure;
        Ok(())
    }
}

fn lock_write(
    state: &Arc<RwLock<InMemoryStoreState>>,
) -> TaskStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryStoreState>> {
    state
        .write()
        .map_err(|err| TaskStoreError::network(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        let mut state = lock_write(&self.state)?;
        if let Some(failure) = state.update_failure.clone() {
            return Err(failure);
        }
        let record = state
            .projects
            .values_mut()
            .flat_map(|records| records.iter_mut())
            .find(|record| record.id() == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        record.set_status(status.as_str());
        Ok(())
    }

    async fn fetch_all(&self, project: ProjectId) -> TaskStoreResult<Vec<TaskRecord>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::network(std::io::Error::other(err.to_string())))?;
        if let Some(failure) = state.fetch_failure.clone() {
            return Err(failure);
        }
        Ok(state.projects.get(&project).cloned().unwrap_or_default())
    }
}
