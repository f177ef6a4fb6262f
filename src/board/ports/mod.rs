//! Port contracts for board synchronization.
//!
//! Ports define infrastructure-agnostic interfaces used by the sync engine.

pub mod notifier;
pub mod store;

pub use notifier::MoveNotifier;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
