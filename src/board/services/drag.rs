//! Drag-and-drop adapter between the UI layer and the sync engine.

use std::sync::Arc;

use tracing::debug;

use crate::board::{
    domain::{TaskId, TaskStatus},
    ports::{MoveNotifier, TaskStore},
    services::sync::{MoveOutcome, SyncEngine, SyncResult},
};

/// Drop gesture observed by the UI layer: a task card released over a
/// status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    task_id: TaskId,
    source_status: TaskStatus,
    destination_status: TaskStatus,
}

impl DropEvent {
    /// Creates a drop event from the gesture's card and columns.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        source_status: TaskStatus,
        destination_status: TaskStatus,
    ) -> Self {
        Self {
            task_id,
            source_status,
            destination_status,
        }
    }

    /// Returns the dragged task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the column the card was dragged from.
    #[must_use]
    pub const fn source_status(&self) -> TaskStatus {
        self.source_status
    }

    /// Returns the column the card was dropped onto.
    #[must_use]
    pub const fn destination_status(&self) -> TaskStatus {
        self.destination_status
    }
}

/// Stateless event-to-call adapter turning drop gestures into move requests.
#[derive(Clone)]
pub struct DragController<S, N>
where
    S: TaskStore,
    N: MoveNotifier,
{
    engine: Arc<SyncEngine<S, N>>,
}

impl<S, N> DragController<S, N>
where
    S: TaskStore,
    N: MoveNotifier,
{
    /// Creates a controller forwarding to the given sync engine.
    #[must_use]
    pub const fn new(engine: Arc<SyncEngine<S, N>>) -> Self {
        Self { engine }
    }

    /// Handles a drop gesture.
    ///
    /// A drop onto the card's own column is ignored without issuing a store
    /// call or touching the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::services::SyncEngineError`] only for internal
    /// state failures; persist failures settle into the returned
    /// [`MoveOutcome`].
    pub async fn handle_drop(&self, event: DropEvent) -> SyncResult<MoveOutcome> {
        if event.source_status == event.destination_status {
            debug!(task = %event.task_id, column = %event.source_status, "drop on same column ignored");
            return Ok(MoveOutcome::NoOp);
        }
        self.engine
            .move_task(event.task_id, event.destination_status)
            .await
    }
}
