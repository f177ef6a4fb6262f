//! Task status enum and the validated domain task type.

use super::{ParseTaskStatusError, TaskId, TaskRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Status column a task occupies on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not begun.
    NotStarted,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// All statuses in canonical column order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not-started" => Ok(Self::NotStarted),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated task as held on the board.
///
/// Only `status` is ever mutated by this crate; every other field the store
/// returned rides along in `payload` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    status: TaskStatus,
    payload: Map<String, Value>,
}

impl Task {
    /// Creates a task with an empty payload.
    #[must_use]
    pub fn new(id: TaskId, status: TaskStatus) -> Self {
        Self {
            id,
            status,
            payload: Map::new(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the status column the task occupies.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the opaque payload carried through from the store.
    #[must_use]
    pub const fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = ParseTaskStatusError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let status = TaskStatus::try_from(record.status())?;
        Ok(Self {
            id: record.id(),
            status,
            payload: record.into_payload(),
        })
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self::with_payload(task.id, task.status.as_str(), task.payload)
    }
}
