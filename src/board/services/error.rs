//! Service-level errors for board commands.

use crate::board::{
    domain::{BoardDomainError, ColumnId, SequenceError, TaskId},
    ports::SnapshotRepositoryError,
};
use thiserror::Error;

/// Reasons a board command was not applied.
///
/// Every variant means the store is exactly as it was before the call.
#[derive(Debug, Clone, Error)]
pub enum BoardError {
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The referenced column does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The task is not listed in the column the command named as its source.
    #[error("task {task_id} is not listed in column {column_id}")]
    TaskNotInColumn {
        /// The task being moved.
        task_id: TaskId,
        /// The column expected to contain it.
        column_id: ColumnId,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// A sequence precondition failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// Snapshot repository operation failed.
    #[error(transparent)]
    Repository(#[from] SnapshotRepositoryError),
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;
