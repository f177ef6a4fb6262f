//! Optimistic move synchronization between the board and the task store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{
    domain::{BoardDomainError, MoveApplied, ProjectId, TaskId, TaskStatus},
    ports::{MoveNotifier, TaskStore, TaskStoreError},
    services::handle::{BoardHandle, BoardLockError},
};

/// Errors escaping the sync engine boundary.
///
/// Persist failures never appear here; `move_task` absorbs them into a
/// [`MoveOutcome`]. Only initial-load failures and internal state errors
/// reach the caller.
#[derive(Debug, Error)]
pub enum SyncEngineError {
    /// The task store rejected or failed a request.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// Fetched data failed board validation.
    #[error(transparent)]
    Board(#[from] BoardDomainError),
    /// Board state became unusable.
    #[error(transparent)]
    State(#[from] BoardLockError),
}

/// Result type for sync engine operations.
pub type SyncResult<T> = Result<T, SyncEngineError>;

/// Outcome of a move request once its persist phase settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task was already at the target status or is not on the board;
    /// nothing was mutated and no store call was issued.
    NoOp,
    /// The optimistic move persisted; the board already reflects it.
    Persisted,
    /// Persist failed; the optimistic move was rolled back and the board
    /// reconciled from the store.
    Reverted,
    /// Persist failed, but a newer move for the same task had already
    /// superseded this one; the board was left to the newer move.
    Superseded,
}

/// Maintains board ⇄ store consistency across asynchronous moves.
///
/// Moves for different tasks run concurrently and independently. Rapid
/// repeated moves of the same task are resolved with a per-task sequence
/// number: each persist request carries the full target status, so the last
/// initiated move wins regardless of network completion order, and a stale
/// failure completion is not allowed to clobber a newer optimistic move.
#[derive(Clone)]
pub struct SyncEngine<S, N>
where
    S: TaskStore,
    N: MoveNotifier,
{
    board: BoardHandle,
    store: Arc<S>,
    notifier: Arc<N>,
    project: ProjectId,
    move_seqs: Arc<Mutex<HashMap<TaskId, u64>>>,
}

impl<S, N> SyncEngine<S, N>
where
    S: TaskStore,
    N: MoveNotifier,
{
    /// Creates a sync engine for one project's board.
    #[must_use]
    pub fn new(board: BoardHandle, store: Arc<S>, notifier: Arc<N>, project: ProjectId) -> Self {
        Self {
            board,
            store,
            notifier,
            project,
            move_seqs: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the board handle for the rendering layer.
    #[must_use]
    pub const fn board(&self) -> &BoardHandle {
        &self.board
    }

    /// Moves a task to a new status column, optimistically first.
    ///
    /// The board transition happens synchronously before the persist request
    /// is issued, so a read taken immediately after this call starts already
    /// shows the task under `new_status`. On persist failure the task is
    /// moved back and the board reconciled from the store; the caller only
    /// ever observes the settled [`MoveOutcome`].
    ///
    /// # Errors
    ///
    /// Returns [`SyncEngineError::State`] when board state became unusable.
    /// Store failures do not escape; they settle into
    /// [`MoveOutcome::Reverted`] or [`MoveOutcome::Superseded`].
    pub async fn move_task(&self, id: TaskId, new_status: TaskStatus) -> SyncResult<MoveOutcome> {
        let Some((old_status, seq)) = self.apply_optimistic(id, new_status)? else {
            return Ok(MoveOutcome::NoOp);
        };

        match self.store.update_status(id, new_status).await {
            Ok(()) => {
                debug!(task = %id, status = %new_status, "move persisted");
                self.notifier.move_succeeded(id);
                Ok(MoveOutcome::Persisted)
            }
            Err(err) => self.handle_persist_failure(id, old_status, seq, &err).await,
        }
    }

    /// Replaces the board from a full fetch of the project's tasks.
    ///
    /// Used for initial population and explicit refetches. All-or-nothing:
    /// fetched data containing an unknown status rejects the whole replace
    /// and the prior board is retained.
    ///
    /// # Errors
    ///
    /// Returns [`SyncEngineError::Store`] when the fetch fails,
    /// [`SyncEngineError::Board`] when fetched data fails validation, or
    /// [`SyncEngineError::State`] when board state became unusable.
    pub async fn refresh(&self) -> SyncResult<()> {
        let records = self.store.fetch_all(self.project).await?;
        let mut board = self.board.write()?;
        board.replace_all(records)?;
        // Pending completions predate the authoritative replace; none of
        // them may revert against it.
        self.clear_seqs()?;
        debug!(project = %self.project, tasks = board.len(), "board replaced from store");
        Ok(())
    }

    /// Applies the optimistic transition in one exclusive write section.
    ///
    /// Returns `None` for the defensive no-op cases: unknown task, or task
    /// already at the target (the board may have changed since the drag
    /// controller read it).
    fn apply_optimistic(
        &self,
        id: TaskId,
        new_status: TaskStatus,
    ) -> SyncResult<Option<(TaskStatus, u64)>> {
        let mut board = self.board.write()?;
        match board.move_task(id, new_status) {
            MoveApplied::Moved { from } => {
                let seq = self.next_seq(id)?;
                debug!(task = %id, from = %from, to = %new_status, seq, "optimistic move applied");
                Ok(Some((from, seq)))
            }
            MoveApplied::AlreadyAtTarget | MoveApplied::UnknownTask => {
                debug!(task = %id, to = %new_status, "move request was a no-op");
                Ok(None)
            }
        }
    }

    async fn handle_persist_failure(
        &self,
        id: TaskId,
        old_status: TaskStatus,
        seq: u64,
        err: &TaskStoreError,
    ) -> SyncResult<MoveOutcome> {
        warn!(task = %id, error = %err, "persist failed");
        self.notifier.move_failed(id);
        if !self.revert_if_current(id, old_status, seq)? {
            return Ok(MoveOutcome::Superseded);
        }
        self.reconcile().await;
        Ok(MoveOutcome::Reverted)
    }

    /// Rolls the task back to `old_status` unless a newer move for the same
    /// task has been initiated since `seq` was issued.
    fn revert_if_current(&self, id: TaskId, old_status: TaskStatus, seq: u64) -> SyncResult<bool> {
        let mut board = self.board.write()?;
        let current = {
            let seqs = self.lock_seqs()?;
            seqs.get(&id).copied() == Some(seq)
        };
        if !current {
            debug!(task = %id, seq, "stale failure completion; board left to newer move");
            return Ok(false);
        }
        board.move_task(id, old_status);
        Ok(true)
    }

    /// Refetches the board after a failed persist, absorbing any error into
    /// a notification so nothing propagates into the rendering layer.
    async fn reconcile(&self) {
        if let Err(err) = self.refresh().await {
            warn!(error = %err, "board reconcile failed; keeping prior state");
            self.notifier.refresh_failed();
        }
    }

    fn next_seq(&self, id: TaskId) -> Result<u64, BoardLockError> {
        let mut seqs = self.lock_seqs()?;
        let counter = seqs.entry(id).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    fn clear_seqs(&self) -> Result<(), BoardLockError> {
        let mut seqs = self.lock_seqs()?;
        seqs.clear();
        Ok(())
    }

    fn lock_seqs(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<TaskId, u64>>, BoardLockError> {
        self.move_seqs
            .lock()
            .map_err(|err| BoardLockError::new(err.to_string()))
    }
}
