//! Services orchestrating board synchronization.

mod drag;
mod handle;
mod sync;

pub use drag::{DragController, DropEvent};
pub use handle::{BoardHandle, BoardLockError};
pub use sync::{MoveOutcome, SyncEngine, SyncEngineError, SyncResult};
