//! Transient form payloads read from the page at submit time.
//!
//! These values live only for the duration of one submit handler: they are
//! read from the form, sent to the backend verbatim, and discarded. Field
//! contents are not validated on the client; empty fields travel as empty
//! strings and the backend decides what to accept.

use serde::{Deserialize, Serialize};

/// Payload of the new-task form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskInput {
    /// Task title as typed.
    pub title: String,
    /// Free-form task description.
    pub description: String,
    /// Due date text in `yyyy-mm-dd` format, as supplied by the date widget.
    #[serde(rename = "date")]
    pub due_date: String,
    /// Selected group identifier or name.
    pub group: String,
}

impl NewTaskInput {
    /// Creates a task payload from the four form field values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            group: group.into(),
        }
    }

    /// Returns `true` when every field reads back empty.
    ///
    /// Used by tests asserting the post-submit cleared state; an all-empty
    /// payload is still a valid submission (the backend rejects it, not us).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.due_date.is_empty()
            && self.group.is_empty()
    }
}

/// Payload of the new-group form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGroupInput {
    /// Group name as typed.
    pub name: String,
}

impl NewGroupInput {
    /// Creates a group payload from the name field value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
