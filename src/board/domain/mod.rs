//! Domain model for board synchronization.
//!
//! The board domain models the status partition, the wire records exchanged
//! with the task store, and the validation applied when records are admitted
//! onto the board, keeping all infrastructure concerns outside the domain
//! boundary.

mod error;
mod ids;
mod partition;
mod record;
mod task;

pub use error::{BoardDomainError, ParseTaskStatusError};
pub use ids::{ProjectId, TaskId};
pub use partition::{BoardState, MoveApplied};
pub use record::TaskRecord;
pub use task::{Task, TaskStatus};
