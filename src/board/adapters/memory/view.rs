//! In-memory view surface for controller and routing tests.

use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{BoardSnapshot, FocusTarget, NewGroupInput, NewTaskInput},
    ports::BoardView,
};

#[derive(Debug, Default)]
struct ViewState {
    task_form: NewTaskInput,
    group_form: NewGroupInput,
    panel_visible: bool,
    focus_log: Vec<FocusTarget>,
    rendered: Vec<BoardSnapshot>,
}

/// Thread-safe [`BoardView`] fake backed by plain field storage.
///
/// Tests seed form fields, drive the controller, and then assert on cleared
/// fields, panel visibility, focus transfers, and rendered snapshots.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardView {
    state: Arc<RwLock<ViewState>>,
}

impl InMemoryBoardView {
    /// Creates a view with empty forms and a hidden panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the new-task form fields.
    pub fn set_task_form(&self, input: NewTaskInput) {
        if let Ok(mut state) = self.state.write() {
            state.task_form = input;
        }
    }

    /// Seeds the new-group form field.
    pub fn set_group_form(&self, input: NewGroupInput) {
        if let Ok(mut state) = self.state.write() {
            state.group_form = input;
        }
    }

    /// Returns whether the new-task panel is currently shown.
    #[must_use]
    pub fn panel_visible(&self) -> bool {
        self.state
            .read()
            .map(|state| state.panel_visible)
            .unwrap_or_default()
    }

    /// Returns every focus transfer observed, in order.
    #[must_use]
    pub fn focus_log(&self) -> Vec<FocusTarget> {
        self.state
            .read()
            .map(|state| state.focus_log.clone())
            .unwrap_or_default()
    }

    /// Returns every snapshot rendered, in order.
    #[must_use]
    pub fn rendered(&self) -> Vec<BoardSnapshot> {
        self.state
            .read()
            .map(|state| state.rendered.clone())
            .unwrap_or_default()
    }

    /// Returns how many renders have been observed.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.rendered().len()
    }
}

impl BoardView for InMemoryBoardView {
    fn read_task_form(&self) -> NewTaskInput {
        self.state
            .read()
            .map(|state| state.task_form.clone())
            .unwrap_or_default()
    }

    fn clear_task_form(&self) {
        if let Ok(mut state) = self.state.write() {
            state.task_form = NewTaskInput::default();
        }
    }

    fn read_group_form(&self) -> NewGroupInput {
        self.state
            .read()
            .map(|state| state.group_form.clone())
            .unwrap_or_default()
    }

    fn clear_group_form(&self) {
        if let Ok(mut state) = self.state.write() {
            state.group_form = NewGroupInput::default();
        }
    }

    fn set_panel_visible(&self, visible: bool) {
        if let Ok(mut state) = self.state.write() {
            state.panel_visible = visible;
        }
    }

    fn focus(&self, target: FocusTarget) {
        if let Ok(mut state) = self.state.write() {
            state.focus_log.push(target);
        }
    }

    fn render(&self, snapshot: &BoardSnapshot) {
        if let Ok(mut state) = self.state.write() {
            state.rendered.push(snapshot.clone());
        }
    }
}
