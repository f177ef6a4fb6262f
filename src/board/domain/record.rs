//! Wire-format task record exchanged with the task store.

use super::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Task record as serialised by the task store.
///
/// The status travels as a plain string here; validation against the
/// three-column enum happens when a record is admitted onto the board.
/// Every field other than `id` and `status` is opaque payload, flattened
/// in and out without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    status: String,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl TaskRecord {
    /// Creates a record with an empty payload.
    #[must_use]
    pub fn new(id: TaskId, status: impl Into<String>) -> Self {
        Self {
            id,
            status: status.into(),
            payload: Map::new(),
        }
    }

    /// Creates a record carrying the given payload fields.
    #[must_use]
    pub fn with_payload(id: TaskId, status: impl Into<String>, payload: Map<String, Value>) -> Self {
        Self {
            id,
            status: status.into(),
            payload,
        }
    }

    /// Adds a payload field, replacing any existing value under the key.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the raw status string.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the opaque payload fields.
    #[must_use]
    pub const fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub(crate) fn into_payload(self) -> Map<String, Value> {
        self.payload
    }
}
