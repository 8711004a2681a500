//! Drag session errors.

use crate::board::domain::TaskId;
use thiserror::Error;

/// Errors returned by drag session transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DragError {
    /// A drag is already in progress; only one session may be active.
    #[error("task {0} is already being dragged")]
    AlreadyDragging(TaskId),
}
