//! Error types for board domain validation and parsing.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Two columns in the same board share an identifier.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),
}

/// Error returned while parsing task priorities from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// A breach of the referential-integrity invariant between task records and
/// column sequences.
///
/// The store never produces these through `move_task`, `create_task` or
/// `delete_task`; they arise from status edits that bypass `move_task` or from
/// inconsistent snapshots handed in by a collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// A task record is not listed in any column.
    #[error("task {0} is not listed in any column")]
    OrphanTask(TaskId),

    /// A task's status names a column other than the one listing it.
    #[error("task {task_id} has status {status} but is listed in {listed_in}")]
    StatusMismatch {
        /// The affected task.
        task_id: TaskId,
        /// The column named by the task's status field.
        status: ColumnId,
        /// The column whose sequence actually contains the task.
        listed_in: ColumnId,
    },

    /// A task id appears more than once across all column sequences.
    #[error("task {task_id} is listed {occurrences} times")]
    DuplicateMembership {
        /// The affected task.
        task_id: TaskId,
        /// Total number of occurrences across every column.
        occurrences: usize,
    },

    /// A column lists an id with no task record behind it.
    #[error("column {column_id} lists unknown task {task_id}")]
    DanglingTaskId {
        /// The column holding the stale id.
        column_id: ColumnId,
        /// The id with no matching record.
        task_id: TaskId,
    },
}
