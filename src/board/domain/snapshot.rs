//! Refetched board state used by the re-render step.
//!
//! The backend remains the single source of truth: a snapshot is fetched
//! after each successful mutation, rendered, and dropped. Nothing here is
//! cached between user actions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One task row as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Backend-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional due date.
    #[serde(default)]
    pub due: Option<NaiveDate>,
    /// Importance flag.
    #[serde(default)]
    pub important: bool,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Identifier of the owning group, when the task is grouped.
    #[serde(default)]
    pub group_id: Option<i64>,
}

/// One group row as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupItem {
    /// Backend-assigned group identifier.
    pub id: i64,
    /// Group name.
    pub name: String,
}

/// Full board state returned by the board-state endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// All tasks visible to the current user.
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
    /// All groups visible to the current user.
    #[serde(default)]
    pub groups: Vec<GroupItem>,
}

impl BoardSnapshot {
    /// Returns the group with the given identifier, if present.
    #[must_use]
    pub fn group_by_id(&self, id: i64) -> Option<&GroupItem> {
        self.groups.iter().find(|group| group.id == id)
    }
}
