//! Command payloads and outcomes for board mutations.

use crate::board::domain::{CapacityStatus, Column, ColumnId, Task, TaskId};

/// Fully specified request to move a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTaskRequest {
    task_id: TaskId,
    from_column_id: ColumnId,
    to_column_id: ColumnId,
    index: usize,
}

impl MoveTaskRequest {
    /// Creates a move request. `index` is clamped by the store.
    #[must_use]
    pub fn new(
        task_id: impl Into<TaskId>,
        from_column_id: impl Into<ColumnId>,
        to_column_id: impl Into<ColumnId>,
        index: usize,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            from_column_id: from_column_id.into(),
            to_column_id: to_column_id.into(),
            index,
        }
    }

    /// Returns the task to move.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the column currently listing the task.
    #[must_use]
    pub const fn from_column_id(&self) -> &ColumnId {
        &self.from_column_id
    }

    /// Returns the destination column.
    #[must_use]
    pub const fn to_column_id(&self) -> &ColumnId {
        &self.to_column_id
    }

    /// Returns the requested insertion index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` when source and destination are the same column.
    #[must_use]
    pub fn is_reorder(&self) -> bool {
        self.from_column_id == self.to_column_id
    }
}

/// What an applied move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task changed position within its column.
    Reordered {
        /// Position before the move.
        from_index: usize,
        /// Position after the move, after clamping.
        to_index: usize,
    },
    /// The task moved to another column and its status was updated.
    Transferred {
        /// Position in the source column before the move.
        from_index: usize,
        /// Position in the destination column, after clamping.
        to_index: usize,
    },
    /// The task was already at the requested position.
    Unchanged,
}

/// Read-only projection of one column for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    /// The column being shown.
    pub column: &'a Column,
    /// Existing tasks admitted by the filter, in column order.
    pub tasks: Vec<&'a Task>,
    /// Load indicator computed over every id the column lists.
    pub capacity: CapacityStatus,
}
