//! Backend API port for board mutations and state retrieval.

use crate::board::domain::{BoardSnapshot, NewGroupInput, NewTaskInput, SortUrl, TaskRef};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for backend API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend HTTP API contract.
///
/// Each method issues exactly one request and settles when the backend
/// responds. There is no retry and no request de-duplication; a rapid double
/// submit reaches the backend twice.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Creates a new task from the submitted form payload.
    ///
    /// Field contents are forwarded verbatim; the backend performs all
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the request cannot be delivered or
    /// [`ApiError::Server`] when the backend answers with a non-success
    /// status.
    async fn create_task(&self, input: &NewTaskInput) -> ApiResult<()>;

    /// Creates a new group from the submitted form payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] as for [`BoardApi::create_task`].
    async fn create_group(&self, input: &NewGroupInput) -> ApiResult<()>;

    /// Toggles the importance flag of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] as for [`BoardApi::create_task`].
    async fn mark_important(&self, task: &TaskRef) -> ApiResult<()>;

    /// Marks an existing task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] as for [`BoardApi::create_task`].
    async fn complete_task(&self, task: &TaskRef) -> ApiResult<()>;

    /// Applies a sort order by issuing a `GET` to the given URL.
    ///
    /// The response body is discarded; the backend records the order and the
    /// following board fetch observes it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] as for [`BoardApi::create_task`].
    async fn apply_sort(&self, url: &SortUrl) -> ApiResult<()>;

    /// Fetches the current board state for re-rendering.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on transport failure, [`ApiError::Server`]
    /// on a non-success status, or [`ApiError::Decode`] when the response body
    /// is not a valid snapshot.
    async fn fetch_board(&self) -> ApiResult<BoardSnapshot>;
}

/// Errors returned by backend API implementations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request could not be delivered (connection refused, timeout, DNS).
    #[error("network error: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend answered with a non-success status.
    #[error("server responded with status {status}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("response decode error: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Wraps a transport-level error.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    /// Wraps a response decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }

    /// Creates a non-success status error.
    #[must_use]
    pub const fn server(status: u16) -> Self {
        Self::Server { status }
    }
}
