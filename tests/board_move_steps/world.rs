//! Shared world state for board move BDD scenarios.

use std::sync::Arc;

use rstest::fixture;

use aalto::board::{
    adapters::memory::{InMemoryTaskStore, RecordingNotifier},
    domain::{ProjectId, TaskRecord},
    services::{BoardHandle, DragController, MoveOutcome, SyncEngine},
};

/// Project every scenario board belongs to.
pub const PROJECT: ProjectId = ProjectId::new(1);

/// Engine type used by the BDD world.
pub type TestEngine = SyncEngine<InMemoryTaskStore, RecordingNotifier>;

/// Scenario world for board move behaviour tests.
pub struct BoardMoveWorld {
    pub store: InMemoryTaskStore,
    pub notifier: RecordingNotifier,
    pub engine: Arc<TestEngine>,
    pub controller: DragController<InMemoryTaskStore, RecordingNotifier>,
    pub seeded: Vec<TaskRecord>,
    pub last_outcome: Option<MoveOutcome>,
}

impl BoardMoveWorld {
    /// Creates a world with an empty store and board.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryTaskStore::new();
        let notifier = RecordingNotifier::new();
        let engine = Arc::new(SyncEngine::new(
            BoardHandle::new(),
            Arc::new(store.clone()),
            Arc::new(notifier.clone()),
            PROJECT,
        ));
        let controller = DragController::new(Arc::clone(&engine));

        Self {
            store,
            notifier,
            engine,
            controller,
            seeded: Vec::new(),
            last_outcome: None,
        }
    }
}

impl Default for BoardMoveWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardMoveWorld {
    BoardMoveWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
