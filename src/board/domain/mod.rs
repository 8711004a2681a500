//! Domain model for the task board.
//!
//! Columns hold ordered task-id sequences and tasks carry the id of the
//! column that lists them. Everything here is pure; mutation is funnelled
//! through the board store in [`crate::board::services`].

mod column;
mod error;
mod filter;
mod ids;
mod snapshot;
mod task;
mod transfer;

pub use column::{CapacityStatus, Column};
pub use error::{BoardDomainError, IntegrityViolation, ParsePriorityError};
pub use filter::{TaskFilter, filter_tasks};
pub use ids::{ColumnId, TaskId};
pub use snapshot::BoardSnapshot;
pub(crate) use snapshot::integrity_violations;
pub use task::{PersistedTaskData, Priority, Task, TaskDraft, TaskPatch};
pub use transfer::{SequenceError, clamp_index, reorder, transfer};
