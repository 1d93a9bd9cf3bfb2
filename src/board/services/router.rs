//! One-time event wiring: routes page interactions to typed operations.

use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{BoardEvent, FocusTarget, PanelState, SortUrl, TaskRef},
    ports::{BoardApi, BoardView},
    services::{BoardControllerResult, TaskBoardController},
};

/// Routes [`BoardEvent`]s to controller operations and panel transitions.
///
/// Constructed once during view initialisation; the host page's listeners
/// suppress their default navigation behaviour and forward each interaction
/// here as a typed event. The router extracts clicked-element values before
/// any handler runs, so handlers receive validated arguments rather than
/// re-querying page state. The router owns the panel visibility state; the
/// view is only told the outcome of each transition.
pub struct BoardEventRouter<A, V>
where
    A: BoardApi,
    V: BoardView,
{
    controller: TaskBoardController<A, V>,
    view: Arc<V>,
    panel: RwLock<PanelState>,
}

impl<A, V> BoardEventRouter<A, V>
where
    A: BoardApi,
    V: BoardView,
{
    /// Creates a router over the given backend and view surface.
    ///
    /// The panel starts hidden.
    #[must_use]
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self {
            controller: TaskBoardController::new(api, Arc::clone(&view)),
            view,
            panel: RwLock::new(PanelState::Hidden),
        }
    }

    /// Returns the underlying controller.
    #[must_use]
    pub const fn controller(&self) -> &TaskBoardController<A, V> {
        &self.controller
    }

    /// Returns the current panel state.
    #[must_use]
    pub fn panel_state(&self) -> PanelState {
        self.panel.read().map(|panel| *panel).unwrap_or_default()
    }

    /// Dispatches one page interaction.
    ///
    /// Network-backed events run their mutation to settlement; panel and
    /// focus events complete synchronously. Errors are returned to the
    /// caller and trigger neither a retry nor a refresh.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::services::BoardControllerError`] when typed
    /// extraction of a clicked-element value fails or a backend request
    /// fails.
    pub async fn handle_event(&self, event: BoardEvent) -> BoardControllerResult<()> {
        match event {
            BoardEvent::TaskFormSubmitted => self.controller.submit_task_form().await,
            BoardEvent::GroupFormSubmitted => self.controller.submit_group_form().await,
            BoardEvent::StarClicked { id_attr } => {
                let task = TaskRef::from_attr(id_attr.as_deref())?;
                self.controller.mark_important(&task).await
            }
            BoardEvent::CheckClicked { id_attr } => {
                let task = TaskRef::from_attr(id_attr.as_deref())?;
                self.controller.complete_task(&task).await
            }
            BoardEvent::SortClicked { url_attr } => {
                let url = SortUrl::from_attr(url_attr.as_deref())?;
                self.controller.apply_sort(&url).await
            }
            BoardEvent::TitleFocused => {
                self.transition_panel(PanelState::on_title_focus);
                Ok(())
            }
            BoardEvent::AppClicked { target } => {
                self.transition_panel(|panel| panel.on_app_click(target));
                Ok(())
            }
            BoardEvent::CancelClicked => {
                self.transition_panel(PanelState::on_cancel_click);
                Ok(())
            }
            BoardEvent::GroupModalShown => {
                // The latest page revision moves modal focus to the
                // class-scoped edit-group fields instead of the new-group
                // name input; reproduced as-is for compatibility.
                self.view.focus(FocusTarget::EditGroupName);
                Ok(())
            }
        }
    }

    /// Applies a panel transition and pushes the resulting visibility to the
    /// view.
    fn transition_panel(&self, transition: impl FnOnce(PanelState) -> PanelState) {
        if let Ok(mut panel) = self.panel.write() {
            *panel = transition(*panel);
            self.view.set_panel_visible(panel.is_visible());
        }
    }
}
