//! Domain model for task-board interactions.
//!
//! The board domain models the transient values a user action carries (form
//! payloads, clicked-element references), the interaction events the page
//! emits, the snapshot of server state used for re-rendering, and the
//! visibility state machine of the new-task panel, while keeping all
//! network and page-surface concerns outside of the domain boundary.

mod action;
mod error;
mod event;
mod input;
mod panel;
mod snapshot;

pub use action::{SortUrl, TaskRef};
pub use error::BoardDomainError;
pub use event::{BoardEvent, FocusTarget};
pub use input::{NewGroupInput, NewTaskInput};
pub use panel::{ClickTarget, PanelState};
pub use snapshot::{BoardSnapshot, GroupItem, TaskItem};
