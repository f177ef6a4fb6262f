//! Store port for persisting status changes and fetching project tasks.

use crate::board::domain::{ProjectId, TaskId, TaskRecord, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Authoritative task persistence contract.
///
/// The sync engine treats every failure variant identically: the optimistic
/// move is rolled back and the board reconciled from a fresh fetch.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a status change for a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist,
    /// [`TaskStoreError::Status`] when the store rejects the update, or
    /// [`TaskStoreError::Network`] on a transport-level failure.
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()>;

    /// Fetches the full task list for a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Status`] or [`TaskStoreError::Network`]
    /// when the fetch does not complete successfully.
    async fn fetch_all(&self, project: ProjectId) -> TaskStoreResult<Vec<TaskRecord>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found in the store.
    #[error("task not found in store: {0}")]
    NotFound(TaskId),

    /// The store answered with a non-success status code.
    #[error("task store rejected the request: HTTP {code}")]
    Status {
        /// HTTP status code the store answered with.
        code: u16,
    },

    /// Transport-level failure (timeout, connection reset, bad payload).
    #[error("task store transport failure: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a transport-level error.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }
}
