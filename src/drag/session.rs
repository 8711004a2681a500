//! Drag session state machine.
//!
//! ```text
//! idle --begin_drag--> dragging --update_drag_preview--> dragging
//!   ^                     |
//!   +--commit/cancel------+
//! ```

use super::{DragError, geometry::preview_index};
use crate::board::{
    domain::{ColumnId, TaskId},
    services::MoveTaskRequest,
};

/// Where a pending drag would land if committed now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPreview {
    /// Column under the pointer.
    pub column_id: ColumnId,
    /// Insertion index within that column.
    pub index: usize,
}

/// Effect of a preview update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewUpdate {
    /// The preview moved; the placeholder must be redrawn.
    Moved(DropPreview),
    /// The pointer moved but the preview is the same as before.
    Unchanged,
    /// No drag is active, so nothing was recorded.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveDrag {
    task_id: TaskId,
    origin_column_id: ColumnId,
    preview: Option<DropPreview>,
}

/// Transient interaction state for one pointer drag.
///
/// The session only records ids; it never touches board state. A commit
/// hands a [`MoveTaskRequest`] back to the caller for the store to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Returns `true` when `task_id` is the task being dragged.
    #[must_use]
    pub fn is_dragging_task(&self, task_id: &TaskId) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.task_id == *task_id)
    }

    /// Returns the dragged task, if any.
    #[must_use]
    pub fn task_id(&self) -> Option<&TaskId> {
        self.active.as_ref().map(|active| &active.task_id)
    }

    /// Returns the column the drag started from, if any.
    #[must_use]
    pub fn origin_column_id(&self) -> Option<&ColumnId> {
        self.active.as_ref().map(|active| &active.origin_column_id)
    }

    /// Returns the current drop preview, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&DropPreview> {
        self.active.as_ref().and_then(|active| active.preview.as_ref())
    }

    /// Starts dragging `task_id` out of `column_id`. The preview starts unset.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::AlreadyDragging`] when a drag is already active;
    /// the running session is left as it was.
    pub fn begin_drag(
        &mut self,
        task_id: impl Into<TaskId>,
        column_id: impl Into<ColumnId>,
    ) -> Result<(), DragError> {
        if let Some(active) = &self.active {
            return Err(DragError::AlreadyDragging(active.task_id.clone()));
        }
        self.active = Some(ActiveDrag {
            task_id: task_id.into(),
            origin_column_id: column_id.into(),
            preview: None,
        });
        Ok(())
    }

    /// Recomputes the preview for a pointer at `pointer_y` over `column_id`.
    ///
    /// `card_midpoints` are the vertical midpoints of the cards currently
    /// rendered in that column. Nothing is written when the resulting
    /// preview equals the current one.
    pub fn update_drag_preview(
        &mut self,
        column_id: &ColumnId,
        pointer_y: f64,
        card_midpoints: &[f64],
    ) -> PreviewUpdate {
        let Some(active) = self.active.as_mut() else {
            return PreviewUpdate::Ignored;
        };
        let index = preview_index(pointer_y, card_midpoints);
        let unchanged = active
            .preview
            .as_ref()
            .is_some_and(|preview| preview.column_id == *column_id && preview.index == index);
        if unchanged {
            return PreviewUpdate::Unchanged;
        }
        let preview = DropPreview {
            column_id: column_id.clone(),
            index,
        };
        active.preview = Some(preview.clone());
        PreviewUpdate::Moved(preview)
    }

    /// Ends the drag with a drop and returns the move to apply.
    ///
    /// Returns `None` when no drag is active or no preview has been
    /// computed yet. The session is idle afterwards in every case.
    pub fn commit_drag(&mut self) -> Option<MoveTaskRequest> {
        let active = self.active.take()?;
        let preview = active.preview?;
        Some(MoveTaskRequest::new(
            active.task_id,
            active.origin_column_id,
            preview.column_id,
            preview.index,
        ))
    }

    /// Ends the drag without a drop. Returns `true` if a drag was active.
    pub fn cancel_drag(&mut self) -> bool {
        self.active.take().is_some()
    }
}
