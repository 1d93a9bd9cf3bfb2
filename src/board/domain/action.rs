//! Validated references extracted from clicked elements.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque backend task identifier lifted from an element attribute.
///
/// The backend assigns ids; the client never parses or interprets them
/// beyond requiring that one is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRef(String);

impl TaskRef {
    /// Creates a task reference from a clicked element's id attribute.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::MissingTaskId`] when the attribute is
    /// absent or empty after trimming.
    pub fn from_attr(attr: Option<&str>) -> Result<Self, BoardDomainError> {
        let value = attr.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(BoardDomainError::MissingTaskId);
        }
        Ok(Self(value.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sort-order URL lifted from a sort control's attribute.
///
/// Accepts absolute `http`/`https` URLs and site-relative paths starting
/// with `/`; anything else cannot be issued as a request and is rejected at
/// extraction time rather than surfacing later as a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortUrl(String);

impl SortUrl {
    /// Creates a sort URL from a clicked element's attribute.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidSortUrl`] when the attribute is
    /// absent, empty, or neither absolute nor site-relative.
    pub fn from_attr(attr: Option<&str>) -> Result<Self, BoardDomainError> {
        let raw = attr.map(str::trim).unwrap_or_default();
        let is_usable = raw.starts_with('/')
            || raw.starts_with("http://")
            || raw.starts_with("https://");
        if !is_usable {
            return Err(BoardDomainError::InvalidSortUrl(raw.to_owned()));
        }
        Ok(Self(raw.to_owned()))
    }

    /// Returns `true` when the URL is site-relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Returns the URL as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SortUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SortUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
