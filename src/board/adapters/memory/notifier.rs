//! Recording notifier adapter for tests and diagnostics.

use std::sync::{Arc, RwLock};

use crate::board::{domain::TaskId, ports::MoveNotifier};

/// Notification event captured by [`RecordingNotifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveNotification {
    /// A move persisted successfully.
    Succeeded(TaskId),
    /// A move failed and was rolled back.
    Failed(TaskId),
    /// A reconciling refetch failed.
    RefreshFailed,
}

/// Notifier that records every event for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<RwLock<Vec<MoveNotification>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with an empty event log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<MoveNotification> {
        self.events
            .read()
            .map_or_else(|_| Vec::new(), |events| events.clone())
    }

    fn record(&self, event: MoveNotification) {
        if let Ok(mut events) = self.events.write() {
            events.push(event);
        }
    }
}

impl MoveNotifier for RecordingNotifier {
    fn move_succeeded(&self, id: TaskId) {
        self.record(MoveNotification::Succeeded(id));
    }

    fn move_failed(&self, id: TaskId) {
        self.record(MoveNotification::Failed(id));
    }

    fn refresh_failed(&self) {
        self.record(MoveNotification::RefreshFailed);
    }
}
