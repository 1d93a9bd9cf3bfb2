//! Recording backend fake for controller and routing tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{BoardSnapshot, NewGroupInput, NewTaskInput, SortUrl, TaskRef},
    ports::{ApiError, ApiResult, BoardApi},
};

/// One request observed by the recording backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssuedRequest {
    /// `POST` to the task-creation endpoint.
    CreateTask(NewTaskInput),
    /// `POST` to the group-creation endpoint.
    CreateGroup(NewGroupInput),
    /// `POST` to the importance-toggle endpoint.
    MarkImportant(TaskRef),
    /// `POST` to the completion endpoint.
    CompleteTask(TaskRef),
    /// `GET` on a sort URL.
    ApplySort(SortUrl),
    /// `GET` on the board-state endpoint.
    FetchBoard,
}

#[derive(Debug, Default)]
struct RecordingState {
    requests: Vec<IssuedRequest>,
    snapshot: BoardSnapshot,
    fail_mutations: Option<ApiError>,
    fail_fetch: Option<ApiError>,
}

/// Thread-safe [`BoardApi`] fake that records every request it receives.
///
/// Mutations succeed and the configured snapshot is served for board fetches
/// unless a failure has been scripted.
#[derive(Debug, Clone, Default)]
pub struct RecordingBoardApi {
    state: Arc<RwLock<RecordingState>>,
}

impl RecordingBoardApi {
    /// Creates a recording backend with an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording backend that serves the given snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: BoardSnapshot) -> Self {
        let api = Self::default();
        api.set_snapshot(snapshot);
        api
    }

    /// Replaces the snapshot served for board fetches.
    pub fn set_snapshot(&self, snapshot: BoardSnapshot) {
        if let Ok(mut state) = self.state.write() {
            state.snapshot = snapshot;
        }
    }

    /// Scripts every subsequent mutation to fail with the given error.
    pub fn fail_mutations_with(&self, error: ApiError) {
        if let Ok(mut state) = self.state.write() {
            state.fail_mutations = Some(error);
        }
    }

    /// Scripts every subsequent board fetch to fail with the given error.
    pub fn fail_fetch_with(&self, error: ApiError) {
        if let Ok(mut state) = self.state.write() {
            state.fail_fetch = Some(error);
        }
    }

    /// Returns every request observed so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<IssuedRequest> {
        self.state
            .read()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }

    /// Returns how many board fetches have been observed.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.requests()
            .iter()
            .filter(|request| matches!(request, IssuedRequest::FetchBoard))
            .count()
    }

    fn record_mutation(&self, request: IssuedRequest) -> ApiResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ApiError::network(std::io::Error::other(err.to_string())))?;
        state.requests.push(request);
        state.fail_mutations.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl BoardApi for RecordingBoardApi {
    async fn create_task(&self, input: &NewTaskInput) -> ApiResult<()> {
        self.record_mutation(IssuedRequest::CreateTask(input.clone()))
    }

    async fn create_group(&self, input: &NewGroupInput) -> ApiResult<()> {
        self.record_mutation(IssuedRequest::CreateGroup(input.clone()))
    }

    async fn mark_important(&self, task: &TaskRef) -> ApiResult<()> {
        self.record_mutation(IssuedRequest::MarkImportant(task.clone()))
    }

    async fn complete_task(&self, task: &TaskRef) -> ApiResult<()> {
        self.record_mutation(IssuedRequest::CompleteTask(task.clone()))
    }

    async fn apply_sort(&self, url: &SortUrl) -> ApiResult<()> {
        self.record_mutation(IssuedRequest::ApplySort(url.clone()))
    }

    async fn fetch_board(&self) -> ApiResult<BoardSnapshot> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ApiError::network(std::io::Error::other(err.to_string())))?;
        state.requests.push(IssuedRequest::FetchBoard);
        if let Some(error) = state.fail_fetch.clone() {
            return Err(error);
        }
        Ok(state.snapshot.clone())
    }
}
