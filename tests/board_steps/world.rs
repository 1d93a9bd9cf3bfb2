//! Shared world state for board interaction BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::memory::{InMemoryBoardView, RecordingBoardApi},
    services::{BoardControllerError, BoardEventRouter},
};

/// Router type used by the BDD world.
pub type TestRouter = BoardEventRouter<RecordingBoardApi, InMemoryBoardView>;

/// Scenario world for board interaction behaviour tests.
pub struct BoardWorld {
    /// Recording backend fake.
    pub api: Arc<RecordingBoardApi>,
    /// In-memory view surface.
    pub view: Arc<InMemoryBoardView>,
    /// Router under test.
    pub router: TestRouter,
    /// Attribute value of the control the scenario will click, if any.
    pub pending_attr: Option<String>,
    /// Outcome of the last dispatched event.
    pub last_result: Option<Result<(), BoardControllerError>>,
}

impl BoardWorld {
    /// Creates a world with fresh fakes and an empty interaction history.
    #[must_use]
    pub fn new() -> Self {
        let api = Arc::new(RecordingBoardApi::new());
        let view = Arc::new(InMemoryBoardView::new());
        let router = BoardEventRouter::new(Arc::clone(&api), Arc::clone(&view));
        Self {
            api,
            view,
            router,
            pending_attr: None,
            last_result: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
