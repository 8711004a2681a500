//! Columns and their advisory work-in-progress capacity.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// An ordered bucket of task ids.
///
/// `task_ids` is the authoritative display order for the column. Only the
/// board store mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    color: String,
    task_ids: Vec<TaskId>,
    max_tasks: Option<usize>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            task_ids: Vec::new(),
            max_tasks: None,
        }
    }

    /// Sets the soft capacity.
    #[must_use]
    pub const fn with_max_tasks(mut self, max_tasks: usize) -> Self {
        self.max_tasks = Some(max_tasks);
        self
    }

    /// Seeds the column with an initial sequence of task ids.
    #[must_use]
    pub fn with_task_ids<I, T>(mut self, task_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.task_ids = task_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the display accent. Opaque to the board logic.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the ordered task ids.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns the soft capacity, if any.
    #[must_use]
    pub const fn max_tasks(&self) -> Option<usize> {
        self.max_tasks
    }

    /// Returns the number of task ids in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` when the column holds no task ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Returns the position of `task_id` in the column, if present.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    /// Returns `true` when the column lists `task_id`.
    #[must_use]
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.task_ids.contains(task_id)
    }

    /// Derives the capacity status from the current length.
    #[must_use]
    pub fn capacity_status(&self, near_percent: u8) -> CapacityStatus {
        CapacityStatus::derive(self.len(), self.max_tasks, near_percent)
    }

    pub(crate) fn replace_task_ids(&mut self, task_ids: Vec<TaskId>) {
        self.task_ids = task_ids;
    }
}

/// Display-only load indicator for a column with a soft capacity.
///
/// Capacity never blocks insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityStatus {
    /// Comfortably below the limit, or no limit set.
    Normal,
    /// At or above `near_percent` of the limit.
    Near,
    /// Strictly above the limit.
    Exceeded,
}

impl CapacityStatus {
    /// Default percentage of `max_tasks` at which a column counts as near.
    pub const DEFAULT_NEAR_PERCENT: u8 = 80;

    /// Classifies `count` against an optional `max`.
    ///
    /// A missing or zero `max` means no limit. `near_percent` is compared with
    /// integer arithmetic: `count * 100 >= max * near_percent`.
    #[must_use]
    pub fn derive(count: usize, max: Option<usize>, near_percent: u8) -> Self {
        let Some(limit) = max.filter(|limit| *limit > 0) else {
            return Self::Normal;
        };
        if count > limit {
            return Self::Exceeded;
        }
        let scaled_count = count.saturating_mul(100);
        let threshold = limit.saturating_mul(usize::from(near_percent));
        if scaled_count >= threshold {
            Self::Near
        } else {
            Self::Normal
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Near => "near",
            Self::Exceeded => "exceeded",
        }
    }
}
