//! Error types for board domain validation and extraction.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A clicked element carried no task identifier in its attribute.
    #[error("clicked element carries no task id")]
    MissingTaskId,

    /// A sort control carried a value that is not a usable URL.
    #[error("invalid sort url '{0}', expected an absolute or site-relative url")]
    InvalidSortUrl(String),
}
