//! View surface port: the typed contract with the rendered page.
//!
//! This replaces ambient selector lookups with an explicit interface. Form
//! reads return whatever the fields currently hold, empty strings included;
//! clearing resets fields without touching panel visibility or focus.

use crate::board::domain::{BoardSnapshot, FocusTarget, NewGroupInput, NewTaskInput};

/// Rendered-page surface the controller reads from and writes to.
pub trait BoardView: Send + Sync {
    /// Reads the current new-task form field values.
    fn read_task_form(&self) -> NewTaskInput;

    /// Resets all new-task form fields to empty.
    fn clear_task_form(&self);

    /// Reads the current new-group form field value.
    fn read_group_form(&self) -> NewGroupInput;

    /// Resets the new-group name field to empty.
    fn clear_group_form(&self);

    /// Shows or hides the new-task input panel.
    fn set_panel_visible(&self, visible: bool);

    /// Moves keyboard focus to the given field.
    fn focus(&self, target: FocusTarget);

    /// Replaces the rendered board with the given snapshot.
    fn render(&self, snapshot: &BoardSnapshot);
}
