//! Task record and the value objects used to create and edit it.

use super::{BoardDomainError, ColumnId, ParsePriorityError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task priority, ordered from least to most pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal scheduling.
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs attention now.
    Urgent,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// A unit of work placed on the board.
///
/// `id` and `created_at` are fixed at construction; every other field is
/// editable through [`Task::apply_patch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: ColumnId,
    priority: Option<Priority>,
    assignee: Option<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a task from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Column the task belongs to.
    pub status: ColumnId,
    /// Persisted priority, if any.
    pub priority: Option<Priority>,
    /// Persisted assignee (initials or image reference), if any.
    pub assignee: Option<String>,
    /// Persisted tags in display order.
    pub tags: Vec<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task in `column` from a draft, stamping `created_at` from
    /// the clock.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the draft title is blank.
    pub fn create(
        id: TaskId,
        column: ColumnId,
        draft: TaskDraft,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let title = validated_title(draft.title)?;
        Ok(Self {
            id,
            title,
            description: draft.description,
            status: column,
            priority: draft.priority,
            assignee: draft.assignee,
            tags: dedup_tags(draft.tags),
            created_at: clock.utc(),
            due_date: draft.due_date,
        })
    }

    /// Reconstructs a task from snapshot data without validation.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            assignee: data.assignee,
            tags: data.tags,
            created_at: data.created_at,
            due_date: data.due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the id of the column the task belongs to.
    #[must_use]
    pub const fn status(&self) -> &ColumnId {
        &self.status
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Merges the fields present in `patch` into this task.
    ///
    /// The patch is validated before anything is written, so on error the
    /// task is unchanged. Setting `status` here does not touch any column
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the patch carries a
    /// blank title.
    pub fn apply_patch(&mut self, patch: TaskPatch) -> Result<(), BoardDomainError> {
        let title = patch.title.map(validated_title).transpose()?;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = patch.description {
            self.description = value;
        }
        if let Some(value) = patch.status {
            self.status = value;
        }
        if let Some(value) = patch.priority {
            self.priority = value;
        }
        if let Some(value) = patch.assignee {
            self.assignee = value;
        }
        if let Some(value) = patch.tags {
            self.tags = dedup_tags(value);
        }
        if let Some(value) = patch.due_date {
            self.due_date = value;
        }
        Ok(())
    }

    pub(crate) fn set_status(&mut self, column: ColumnId) {
        self.status = column;
    }
}

fn validated_title(title: String) -> Result<String, BoardDomainError> {
    if title.trim().is_empty() {
        return Err(BoardDomainError::EmptyTitle);
    }
    Ok(title)
}

/// Drops repeated labels, keeping the first occurrence of each.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

/// Field values for a task that does not exist yet.
///
/// The store assigns the id, creation time and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    assignee: Option<String>,
    tags: Vec<String>,
    due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates a draft with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            assignee: None,
            tags: Vec::new(),
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Partial update for an existing task.
///
/// Absent fields are left untouched. Optional task fields use a nested
/// `Option` so a patch can clear them: `Some(None)` clears, `Some(Some(v))`
/// sets. There is no way to express a change to `id` or `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<Option<String>>,
    status: Option<ColumnId>,
    priority: Option<Option<Priority>>,
    assignee: Option<Option<String>>,
    tags: Option<Vec<String>>,
    due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets or clears the description.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Writes the status field directly.
    ///
    /// This bypasses column membership; prefer a move for column changes.
    #[must_use]
    pub fn status(mut self, column: impl Into<ColumnId>) -> Self {
        self.status = Some(column.into());
        self
    }

    /// Sets or clears the priority.
    #[must_use]
    pub const fn priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets or clears the assignee.
    #[must_use]
    pub fn assignee(mut self, assignee: Option<String>) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Replaces the tags.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the status carried by the patch, if any.
    #[must_use]
    pub const fn requested_status(&self) -> Option<&ColumnId> {
        self.status.as_ref()
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn without_status(mut self) -> Self {
        self.status = None;
        self
    }
}
