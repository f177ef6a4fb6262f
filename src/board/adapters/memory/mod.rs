//! In-memory adapters for tests and local development.

mod notifier;
mod store;

pub use notifier::{MoveNotification, RecordingNotifier};
pub use store::InMemoryTaskStore;
