//! Interaction-layer wiring between a drag session and a board store.

use mockable::Clock;

use super::{DragError, DragSession, PreviewUpdate};
use crate::board::{
    domain::{ColumnId, TaskId},
    services::{BoardResult, BoardStore, MoveOutcome},
};

/// Routes pointer events to a [`DragSession`] and commits drops into a
/// [`BoardStore`].
///
/// Create, update and delete go straight to the store via
/// [`DragDropController::store_mut`].
#[derive(Debug, Clone)]
pub struct DragDropController<C>
where
    C: Clock + Send + Sync,
{
    store: BoardStore<C>,
    session: DragSession,
}

impl<C> DragDropController<C>
where
    C: Clock + Send + Sync,
{
    /// Wraps a store with an idle drag session.
    #[must_use]
    pub const fn new(store: BoardStore<C>) -> Self {
        Self {
            store,
            session: DragSession::new(),
        }
    }

    /// Returns the board store.
    #[must_use]
    pub const fn store(&self) -> &BoardStore<C> {
        &self.store
    }

    /// Returns the board store for direct commands.
    pub const fn store_mut(&mut self) -> &mut BoardStore<C> {
        &mut self.store
    }

    /// Returns the drag session.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Consumes the controller and returns the store.
    #[must_use]
    pub fn into_store(self) -> BoardStore<C> {
        self.store
    }

    /// Handles pointer-down on a task card.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::AlreadyDragging`] while another drag is active.
    pub fn begin_drag(
        &mut self,
        task_id: impl Into<TaskId>,
        column_id: impl Into<ColumnId>,
    ) -> Result<(), DragError> {
        self.session.begin_drag(task_id, column_id)
    }

    /// Handles pointer movement over a column's drop surface.
    ///
    /// Movement over a column the board does not know is ignored.
    pub fn update_drag_preview(
        &mut self,
        column_id: &ColumnId,
        pointer_y: f64,
        card_midpoints: &[f64],
    ) -> PreviewUpdate {
        if self.store.column(column_id).is_none() {
            tracing::debug!(column_id = %column_id, "pointer over unknown column ignored");
            return PreviewUpdate::Ignored;
        }
        self.session
            .update_drag_preview(column_id, pointer_y, card_midpoints)
    }

    /// Handles the drop: applies the pending move, if any, and resets the
    /// session.
    ///
    /// Returns `None` when there was nothing to commit, otherwise the store's
    /// verdict on the move.
    pub fn commit_drag(&mut self) -> Option<BoardResult<MoveOutcome>> {
        let request = self.session.commit_drag()?;
        Some(self.store.move_task(&request))
    }

    /// Handles drag-end without a drop.
    pub fn cancel_drag(&mut self) -> bool {
        self.session.cancel_drag()
    }
}
