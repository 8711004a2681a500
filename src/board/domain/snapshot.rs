//! Full board state as exchanged with persistence collaborators.

use super::{BoardDomainError, Column, ColumnId, IntegrityViolation, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Columns in board order plus every task record keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    columns: Vec<Column>,
    tasks: BTreeMap<TaskId, Task>,
}

impl BoardSnapshot {
    /// Builds a snapshot from columns and task records.
    ///
    /// Referential integrity is not enforced here; see
    /// [`BoardSnapshot::integrity_violations`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`] when two columns share an
    /// id.
    pub fn new(
        columns: Vec<Column>,
        tasks: impl IntoIterator<Item = Task>,
    ) -> Result<Self, BoardDomainError> {
        let snapshot = Self {
            columns,
            tasks: tasks
                .into_iter()
                .map(|task| (task.id().clone(), task))
                .collect(),
        };
        snapshot.ensure_unique_columns()?;
        Ok(snapshot)
    }

    pub(crate) const fn from_parts(columns: Vec<Column>, tasks: BTreeMap<TaskId, Task>) -> Self {
        Self { columns, tasks }
    }

    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the task records keyed by id.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    /// Splits the snapshot into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Column>, BTreeMap<TaskId, Task>) {
        (self.columns, self.tasks)
    }

    /// Checks that no two columns share an id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`] naming the first repeat.
    pub fn ensure_unique_columns(&self) -> Result<(), BoardDomainError> {
        let mut seen: HashSet<&ColumnId> = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !seen.insert(column.id()) {
                return Err(BoardDomainError::DuplicateColumn(column.id().clone()));
            }
        }
        Ok(())
    }

    /// Lists every breach of the referential-integrity invariant.
    ///
    /// An empty result means each task is listed exactly once, in the column
    /// its status names, and every listed id has a record.
    #[must_use]
    pub fn integrity_violations(&self) -> Vec<IntegrityViolation> {
        integrity_violations(&self.columns, &self.tasks)
    }
}

pub(crate) fn integrity_violations(
    columns: &[Column],
    tasks: &BTreeMap<TaskId, Task>,
) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();
    let mut membership: BTreeMap<&TaskId, Vec<&ColumnId>> = BTreeMap::new();

    for column in columns {
        for task_id in column.task_ids() {
            membership.entry(task_id).or_default().push(column.id());
            if !tasks.contains_key(task_id) {
                violations.push(IntegrityViolation::DanglingTaskId {
                    column_id: column.id().clone(),
                    task_id: task_id.clone(),
                });
            }
        }
    }

    for (task_id, task) in tasks {
        let listed = membership.get(task_id).map_or(&[][..], Vec::as_slice);
        match listed {
            [] => violations.push(IntegrityViolation::OrphanTask(task_id.clone())),
            [column_id] => {
                if *column_id != task.status() {
                    violations.push(IntegrityViolation::StatusMismatch {
                        task_id: task_id.clone(),
                        status: task.status().clone(),
                        listed_in: (*column_id).clone(),
                    });
                }
            }
            many => violations.push(IntegrityViolation::DuplicateMembership {
                task_id: task_id.clone(),
                occurrences: many.len(),
            }),
        }
    }

    violations
}
