//! Task board controller: the five backend mutations plus view refresh.

use std::sync::Arc;
use thiserror::Error;

use crate::board::{
    domain::{BoardDomainError, SortUrl, TaskRef},
    ports::{ApiError, BoardApi, BoardView},
};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardControllerError {
    /// Typed extraction of a clicked-element value failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// A backend request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result type for board controller operations.
pub type BoardControllerResult<T> = Result<T, BoardControllerError>;

/// Orchestrates board mutations against the backend and the follow-up view
/// refresh.
///
/// Each operation issues exactly one mutation request. Only after that
/// request resolves does the controller clear the originating form (where one
/// exists) and run the refresh step; a failed request leaves the form intact
/// and triggers no refresh, surfacing the error to the caller instead of
/// swallowing it. Operations do not coordinate with each other: a rapid
/// double submit issues two independent requests.
#[derive(Clone)]
pub struct TaskBoardController<A, V>
where
    A: BoardApi,
    V: BoardView,
{
    api: Arc<A>,
    view: Arc<V>,
}

impl<A, V> TaskBoardController<A, V>
where
    A: BoardApi,
    V: BoardView,
{
    /// Creates a controller over the given backend and view surface.
    #[must_use]
    pub const fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self { api, view }
    }

    /// Submits the new-task form.
    ///
    /// Reads the four form fields at call time and forwards them verbatim;
    /// empty fields are the backend's problem, not ours.
    ///
    /// # Errors
    ///
    /// Returns [`BoardControllerError::Api`] when the creation request or the
    /// follow-up board fetch fails.
    pub async fn submit_task_form(&self) -> BoardControllerResult<()> {
        let input = self.view.read_task_form();
        self.api.create_task(&input).await?;
        self.view.clear_task_form();
        self.refresh().await
    }

    /// Submits the new-group form.
    ///
    /// # Errors
    ///
    /// Returns [`BoardControllerError::Api`] when the creation request or the
    /// follow-up board fetch fails.
    pub async fn submit_group_form(&self) -> BoardControllerResult<()> {
        let input = self.view.read_group_form();
        self.api.create_group(&input).await?;
        self.view.clear_group_form();
        self.refresh().await
    }

    /// Toggles the importance flag of the referenced task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardControllerError::Api`] when the toggle request or the
    /// follow-up board fetch fails.
    pub async fn mark_important(&self, task: &TaskRef) -> BoardControllerResult<()> {
        self.api.mark_important(task).await?;
        self.refresh().await
    }

    /// Marks the referenced task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardControllerError::Api`] when the completion request or
    /// the follow-up board fetch fails.
    pub async fn complete_task(&self, task: &TaskRef) -> BoardControllerResult<()> {
        self.api.complete_task(task).await?;
        self.refresh().await
    }

    /// Applies the sort order behind the given URL.
    ///
    /// # Errors
    ///
    /// Returns [`BoardControllerError::Api`] when the sort request or the
    /// follow-up board fetch fails.
    pub async fn apply_sort(&self, url: &SortUrl) -> BoardControllerResult<()> {
        self.api.apply_sort(url).await?;
        self.refresh().await
    }

    /// Refetches board state and re-renders the view.
    ///
    /// Runs exactly once per successful mutation; also callable on its own,
    /// for a host page that wants an explicit refresh.
    ///
    /// # Errors
    ///
    /// Returns [`BoardControllerError::Api`] when the board fetch fails; the
    /// previously rendered state is left in place.
    pub async fn refresh(&self) -> BoardControllerResult<()> {
        let snapshot = self.api.fetch_board().await?;
        self.view.render(&snapshot);
        Ok(())
    }
}
