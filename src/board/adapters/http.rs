//! HTTP adapter for the backend board API.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use crate::board::{
    domain::{BoardSnapshot, NewGroupInput, NewTaskInput, SortUrl, TaskRef},
    ports::{ApiError, ApiResult, BoardApi},
};

/// Task-creation endpoint path.
const TASKS_NEW: &str = "/api/tasks/new";
/// Group-creation endpoint path.
const GROUPS_NEW: &str = "/api/groups/new";
/// Importance-toggle endpoint path.
const TASKS_IMPORTANT: &str = "/api/tasks/important";
/// Completion endpoint path.
const TASKS_COMPLETED: &str = "/api/tasks/completed";
/// Board-state endpoint path.
const BOARD_STATE: &str = "/api/board";

/// Per-request timeout applied to every backend call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `reqwest`-backed implementation of [`BoardApi`].
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBoardApi {
    /// Creates an API client rooted at the given base URL.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::network)?;
        let base = base_url.into();
        Ok(Self {
            client,
            base_url: base.trim_end_matches('/').to_owned(),
        })
    }

    /// Joins a site-relative path onto the configured base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issues a POST with a JSON body and discards the response body.
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> ApiResult<()> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::network)?;
        check_status(&response)
    }
}

/// Maps a non-success response status to [`ApiError::Server`].
fn check_status(response: &reqwest::Response) -> ApiResult<()> {
    let status = response.status();
    if status.is_success() || status.is_redirection() {
        // The backend answers mutations with a redirect back to the board.
        return Ok(());
    }
    Err(ApiError::server(status.as_u16()))
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn create_task(&self, input: &NewTaskInput) -> ApiResult<()> {
        let body = serde_json::to_value(input).map_err(ApiError::decode)?;
        self.post_json(TASKS_NEW, &body).await
    }

    async fn create_group(&self, input: &NewGroupInput) -> ApiResult<()> {
        let body = serde_json::to_value(input).map_err(ApiError::decode)?;
        self.post_json(GROUPS_NEW, &body).await
    }

    async fn mark_important(&self, task: &TaskRef) -> ApiResult<()> {
        self.post_json(TASKS_IMPORTANT, &json!({ "id": task.as_str() }))
            .await
    }

    async fn complete_task(&self, task: &TaskRef) -> ApiResult<()> {
        self.post_json(TASKS_COMPLETED, &json!({ "id": task.as_str() }))
            .await
    }

    async fn apply_sort(&self, url: &SortUrl) -> ApiResult<()> {
        let target = if url.is_relative() {
            self.endpoint(url.as_str())
        } else {
            url.as_str().to_owned()
        };
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(ApiError::network)?;
        check_status(&response)
    }

    async fn fetch_board(&self) -> ApiResult<BoardSnapshot> {
        let response = self
            .client
            .get(self.endpoint(BOARD_STATE))
            .send()
            .await
            .map_err(ApiError::network)?;
        check_status(&response)?;
        response.json().await.map_err(ApiError::decode)
    }
}
