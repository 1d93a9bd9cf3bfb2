//! HTML renderer for board snapshots.
//!
//! The re-render step that replaces whole-page reloads: a fetched
//! [`BoardSnapshot`] is turned into the board markup fragment, carrying the
//! element ids and marker classes the event wiring binds to. Rendering is a
//! pure function of the snapshot and the injected clock, so it can be
//! asserted on directly in tests.

use minijinja::Environment;
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::board::domain::{BoardSnapshot, TaskItem};

/// Board markup template.
///
/// Ids and classes are the wiring contract with the page: the new-task form
/// and its fields, the hidden field panel with its cancel control, the
/// new-group form, and per-task `star`/`sort`/`check` controls carrying the
/// task id or sort URL in a data attribute.
const BOARD_TEMPLATE: &str = r#"<div id="app">
  <form id="new-task-form">
    <input id="new-task-title" name="title" type="text">
    <div id="new-task-fields" class="d-none">
      <textarea id="new-task-description" name="description"></textarea>
      <input id="datepicker" name="date" type="text" placeholder="yyyy-mm-dd">
      <select id="new-task-group" name="group">
        <option value=""></option>
        {%- for group in groups %}
        <option value="{{ group.id }}">{{ group.name }}</option>
        {%- endfor %}
      </select>
      <button type="submit">Add</button>
      <button id="cancel-btn" type="button">Cancel</button>
    </div>
  </form>
  <a class="sort" data-sort-url="/api/board?order=due">Due date</a>
  <a class="sort" data-sort-url="/api/board?order=group">Group</a>
  <ul id="task-list">
    {%- for task in tasks %}
    <li class="task{% if task.completed %} completed{% endif %}{% if task.overdue %} overdue{% endif %}">
      <span class="star{% if task.important %} important{% endif %}" data-task-id="{{ task.id }}">&#9733;</span>
      <span class="title">{{ task.title }}</span>
      {%- if task.description %}
      <span class="description">{{ task.description }}</span>
      {%- endif %}
      {%- if task.due %}
      <span class="due">{{ task.due }}</span>
      {%- endif %}
      {%- if task.group_name %}
      <span class="group">{{ task.group_name }}</span>
      {%- endif %}
      <span class="check" data-task-id="{{ task.id }}">&#10003;</span>
    </li>
    {%- endfor %}
  </ul>
  <form id="new-group-form">
    <input id="new-group-name" name="name" type="text">
    <button type="submit">Add group</button>
  </form>
</div>
"#;

/// Errors returned while rendering a board snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Template expansion failed.
    #[error("board template rendering failed: {reason}")]
    Template {
        /// Renderer-reported failure description.
        reason: String,
    },
}

/// Template-facing view of one task row.
#[derive(Debug, Serialize)]
struct TaskContext<'a> {
    id: i64,
    title: &'a str,
    description: Option<&'a str>,
    due: Option<String>,
    important: bool,
    completed: bool,
    overdue: bool,
    group_name: Option<&'a str>,
}

/// Template-facing view of the whole snapshot.
#[derive(Debug, Serialize)]
struct BoardContext<'a> {
    tasks: Vec<TaskContext<'a>>,
    groups: &'a [crate::board::domain::GroupItem],
}

/// `minijinja`-backed snapshot renderer.
#[derive(Clone)]
pub struct HtmlBoardRenderer<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl<C> HtmlBoardRenderer<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a renderer that derives "today" from the given clock.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Renders the board markup fragment for a snapshot.
    ///
    /// Incomplete tasks whose due date lies before the clock's current date
    /// are marked overdue.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when template expansion fails.
    pub fn render(&self, snapshot: &BoardSnapshot) -> Result<String, RenderError> {
        let today = self.clock.utc().date_naive();
        let tasks = snapshot
            .tasks
            .iter()
            .map(|task| task_context(task, snapshot, today))
            .collect();
        let context = BoardContext {
            tasks,
            groups: &snapshot.groups,
        };

        let environment = Environment::new();
        environment
            .render_str(BOARD_TEMPLATE, context)
            .map_err(|error| RenderError::Template {
                reason: error.to_string(),
            })
    }
}

/// Builds the template context for one task row.
fn task_context<'a>(
    task: &'a TaskItem,
    snapshot: &'a BoardSnapshot,
    today: chrono::NaiveDate,
) -> TaskContext<'a> {
    let group_name = task
        .group_id
        .and_then(|id| snapshot.group_by_id(id))
        .map(|group| group.name.as_str());
    let overdue = !task.completed && task.due.is_some_and(|due| due < today);
    TaskContext {
        id: task.id,
        title: &task.title,
        description: task.description.as_deref(),
        due: task.due.map(|due| due.format("%Y-%m-%d").to_string()),
        important: task.important,
        completed: task.completed,
        overdue,
        group_name,
    }
}
