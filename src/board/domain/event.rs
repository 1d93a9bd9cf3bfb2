//! Interaction events emitted by the page.
//!
//! One variant per registered listener. Attribute-bearing variants carry the
//! raw attribute value exactly as the page exposes it; typed extraction
//! happens in the router so a missing attribute surfaces as a domain error
//! instead of an undefined value travelling to the backend.

use super::ClickTarget;

/// A discrete user interaction on the board page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// The new-task form was submitted.
    TaskFormSubmitted,
    /// The new-group form was submitted.
    GroupFormSubmitted,
    /// A star (importance) marker was clicked.
    StarClicked {
        /// Raw task-id attribute of the clicked element, if present.
        id_attr: Option<String>,
    },
    /// A sort control was clicked.
    SortClicked {
        /// Raw URL attribute of the clicked element, if present.
        url_attr: Option<String>,
    },
    /// A check (completion) marker was clicked.
    CheckClicked {
        /// Raw task-id attribute of the clicked element, if present.
        id_attr: Option<String>,
    },
    /// The new-task title field received focus.
    TitleFocused,
    /// A click landed somewhere inside the app root.
    AppClicked {
        /// Kind of element the click targeted.
        target: ClickTarget,
    },
    /// The cancel control of the new-task panel was clicked.
    CancelClicked,
    /// The add-group modal became visible.
    GroupModalShown,
}

/// Field a programmatic focus transfer moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The single name input of the add-group modal.
    NewGroupName,
    /// The class-scoped edit-group name fields.
    ///
    /// The latest page revision moves modal focus here rather than to
    /// [`FocusTarget::NewGroupName`]; the router reproduces that behaviour
    /// so compatibility tests observe what the page actually does.
    EditGroupName,
}
