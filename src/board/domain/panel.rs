//! Visibility state machine for the new-task input panel.
//!
//! The panel holding the new-task fields starts hidden. Focusing the title
//! field reveals it; a click anywhere in the app whose target is not a form
//! input, or a click on the cancel control, hides it again. Clicks landing
//! on inputs, selects, or text areas leave the panel as it is, so a user can
//! move between fields without the panel collapsing underneath them.

use serde::{Deserialize, Serialize};

/// Element kind carried by a click event, the typed stand-in for the
/// clicked element's tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// An `<input>` element.
    Input,
    /// A `<select>` element.
    Select,
    /// A `<textarea>` element.
    TextArea,
    /// Any other element.
    Other,
}

impl ClickTarget {
    /// Returns `true` when the target is a form field that keeps the panel
    /// open.
    #[must_use]
    pub const fn is_form_field(self) -> bool {
        matches!(self, Self::Input | Self::Select | Self::TextArea)
    }
}

/// Visibility state of the new-task input panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    /// Panel fields are not shown.
    #[default]
    Hidden,
    /// Panel fields are shown.
    Visible,
}

impl PanelState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
        }
    }

    /// Returns `true` when the panel is shown.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// State after the title field receives focus.
    #[must_use]
    pub const fn on_title_focus(self) -> Self {
        Self::Visible
    }

    /// State after a click lands somewhere in the app.
    ///
    /// Clicks targeting inputs, selects, or text areas are no-ops; any other
    /// target hides the panel.
    #[must_use]
    pub const fn on_app_click(self, target: ClickTarget) -> Self {
        if target.is_form_field() { self } else { Self::Hidden }
    }

    /// State after the cancel control is clicked.
    ///
    /// The cancel control is a plain button, so this follows the same rule
    /// as any other non-field click.
    #[must_use]
    pub const fn on_cancel_click(self) -> Self {
        Self::Hidden
    }
}
