//! Notifier port surfacing move outcomes to the user-facing layer.

use crate::board::domain::TaskId;

/// User-facing notification sink for move and refresh outcomes.
///
/// Injected into the sync engine rather than reached as a global so the
/// engine stays testable in isolation. Implementations render the events as
/// transient messages (a toast or equivalent); presentation is out of scope
/// here.
pub trait MoveNotifier: Send + Sync {
    /// A status move persisted successfully.
    fn move_succeeded(&self, id: TaskId);

    /// A status move failed to persist and was rolled back.
    fn move_failed(&self, id: TaskId);

    /// A reconciling refetch failed; the board kept its prior state.
    fn refresh_failed(&self);
}
