//! Shared, lock-guarded handle to the board partition.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::board::domain::BoardState;

/// Error raised when board state became unusable after a panicking writer.
#[derive(Debug, Clone, Error)]
#[error("board state lock poisoned: {0}")]
pub struct BoardLockError(String);

impl BoardLockError {
    pub(crate) fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

/// Cloneable handle to the board state shared between the sync engine and
/// the rendering layer.
///
/// Readers take the lock for the duration of a render pass; each mutation
/// happens inside one exclusive write section, so a reader never observes a
/// task in zero or two columns.
#[derive(Debug, Clone, Default)]
pub struct BoardHandle {
    inner: Arc<RwLock<BoardState>>,
}

impl BoardHandle {
    /// Creates a handle around an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires shared read access for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`BoardLockError`] when the lock is poisoned.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, BoardState>, BoardLockError> {
        self.inner
            .read()
            .map_err(|err| BoardLockError::new(err.to_string()))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, BoardState>, BoardLockError> {
        self.inner
            .write()
            .map_err(|err| BoardLockError::new(err.to_string()))
    }
}
