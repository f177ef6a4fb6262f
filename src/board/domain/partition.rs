//! Status-partitioned board state.

use super::{BoardDomainError, Task, TaskId, TaskRecord, TaskStatus};
use std::collections::HashMap;

/// Result of applying a move to the partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveApplied {
    /// The task changed column; `from` is the column it left.
    Moved {
        /// Column the task occupied before the move.
        from: TaskStatus,
    },
    /// The task already sat in the target column; nothing changed.
    AlreadyAtTarget,
    /// The task is not on the board; nothing changed.
    UnknownTask,
}

/// Partition of a project's tasks into one ordered list per status.
///
/// Invariant: every task appears in exactly one list, and that list matches
/// the task's `status` field. All mutation funnels through [`Self::move_task`]
/// and [`Self::replace_all`] so the invariant is enforced in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    columns: HashMap<TaskStatus, Vec<Task>>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            columns: TaskStatus::ALL
                .iter()
                .map(|status| (*status, Vec::new()))
                .collect(),
        }
    }
}

impl BoardState {
    /// Creates an empty board with all three columns present.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ordered task list for a status column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        self.columns.get(&status).map_or(&[], Vec::as_slice)
    }

    /// Returns the status column a task currently occupies.
    #[must_use]
    pub fn status_of(&self, id: TaskId) -> Option<TaskStatus> {
        self.columns.iter().find_map(|(status, tasks)| {
            tasks.iter().any(|task| task.id() == id).then_some(*status)
        })
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.columns
            .values()
            .flat_map(|tasks| tasks.iter())
            .find(|task| task.id() == id)
    }

    /// Iterates over all tasks in canonical column order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        TaskStatus::ALL
            .into_iter()
            .flat_map(|status| self.column(status).iter())
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Returns `true` when no column holds any task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves a task to a new status column as one synchronous transition.
    ///
    /// Removes the task from its current list, updates its status field, and
    /// appends it to the target list. A caller holding exclusive access
    /// therefore never exposes a state where the task is in zero or two
    /// lists. Unknown tasks and same-column moves leave the board untouched.
    pub fn move_task(&mut self, id: TaskId, new_status: TaskStatus) -> MoveApplied {
        let Some(old_status) = self.status_of(id) else {
            return MoveApplied::UnknownTask;
        };
        if old_status == new_status {
            return MoveApplied::AlreadyAtTarget;
        }
        let Some(mut task) = self.take_task(old_status, id) else {
            return MoveApplied::UnknownTask;
        };
        task.set_status(new_status);
        self.columns.entry(new_status).or_default().push(task);
        MoveApplied::Moved { from: old_status }
    }

    /// Replaces the whole partition from a full record set.
    ///
    /// All-or-nothing: if any record carries a status outside the three-value
    /// enum the replace is rejected and the prior partition is retained.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownStatus`] naming the offending
    /// status string.
    pub fn replace_all(&mut self, records: Vec<TaskRecord>) -> Result<(), BoardDomainError> {
        let mut columns: HashMap<TaskStatus, Vec<Task>> = TaskStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        for record in records {
            let task = Task::try_from(record)?;
            columns.entry(task.status()).or_default().push(task);
        }
        self.columns = columns;
        Ok(())
    }

    fn take_task(&mut self, status: TaskStatus, id: TaskId) -> Option<Task> {
        let column = self.columns.get_mut(&status)?;
        let index = column.iter().position(|task| task.id() == id)?;
        Some(column.remove(index))
    }
}
