//! The board store: sole owner and mutator of columns and tasks.
//!
//! Every command validates and computes its full effect before writing, so a
//! command either applies completely or leaves the board untouched. Refused
//! commands are reported as [`BoardError`] and logged at `warn`; none of them
//! panic.

use std::collections::BTreeMap;
use std::sync::Arc;

use mockable::Clock;

use super::{BoardConfig, BoardError, BoardResult, ColumnView, MoveOutcome, MoveTaskRequest};
use crate::board::{
    domain::{
        BoardSnapshot, Column, ColumnId, IntegrityViolation, Task, TaskDraft, TaskFilter, TaskId,
        TaskPatch, integrity_violations, reorder, transfer,
    },
    ports::BoardSnapshotRepository,
};

/// Authoritative in-memory board state.
#[derive(Debug, Clone)]
pub struct BoardStore<C>
where
    C: Clock + Send + Sync,
{
    columns: Vec<Column>,
    tasks: BTreeMap<TaskId, Task>,
    config: BoardConfig,
    clock: Arc<C>,
}

impl<C> BoardStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty board with default configuration.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_config(BoardConfig::default(), clock)
    }

    /// Creates an empty board with explicit configuration.
    #[must_use]
    pub const fn with_config(config: BoardConfig, clock: Arc<C>) -> Self {
        Self {
            columns: Vec::new(),
            tasks: BTreeMap::new(),
            config,
            clock,
        }
    }

    /// Creates a board from a snapshot.
    ///
    /// Integrity violations in the snapshot are logged and kept; see
    /// [`BoardStore::restore`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when the snapshot repeats a column id.
    pub fn from_snapshot(
        snapshot: BoardSnapshot,
        config: BoardConfig,
        clock: Arc<C>,
    ) -> BoardResult<Self> {
        let mut store = Self::with_config(config, clock);
        store.restore(snapshot)?;
        Ok(store)
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns every task record keyed by id.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Looks up a column by id.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Returns the first column whose sequence lists `task_id`.
    #[must_use]
    pub fn column_of(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns.iter().find(|column| column.contains(task_id))
    }

    /// Returns a copy of the full board state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_parts(self.columns.clone(), self.tasks.clone())
    }

    /// Lists breaches of the referential-integrity invariant.
    ///
    /// Only status edits that bypass reconciliation or inconsistent restored
    /// snapshots can make this non-empty.
    #[must_use]
    pub fn verify_integrity(&self) -> Vec<IntegrityViolation> {
        integrity_violations(&self.columns, &self.tasks)
    }

    /// Replaces the whole board with `snapshot`.
    ///
    /// The snapshot is accepted even when it breaks referential integrity;
    /// the violations are logged and returned so the caller can decide what
    /// to do about them.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when the snapshot repeats a column id.
    /// The board is unchanged in that case.
    pub fn restore(&mut self, snapshot: BoardSnapshot) -> BoardResult<Vec<IntegrityViolation>> {
        snapshot.ensure_unique_columns()?;
        let violations = snapshot.integrity_violations();
        for violation in &violations {
            tracing::warn!(%violation, "restored snapshot breaks board integrity");
        }
        let (columns, tasks) = snapshot.into_parts();
        self.columns = columns;
        self.tasks = tasks;
        tracing::debug!(
            columns = self.columns.len(),
            tasks = self.tasks.len(),
            "board state restored"
        );
        Ok(violations)
    }

    /// Loads the stored snapshot from `repository` and restores it.
    ///
    /// Returns `Ok(None)` and leaves the board untouched when the repository
    /// is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when loading fails, or
    /// [`BoardError::Domain`] when the stored snapshot repeats a column id.
    pub fn load_from(
        &mut self,
        repository: &impl BoardSnapshotRepository,
    ) -> BoardResult<Option<Vec<IntegrityViolation>>> {
        repository
            .load()?
            .map(|snapshot| self.restore(snapshot))
            .transpose()
    }

    /// Saves the current board to `repository`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when saving fails.
    pub fn save_to(&self, repository: &impl BoardSnapshotRepository) -> BoardResult<()> {
        repository.save(&self.snapshot())?;
        Ok(())
    }

    /// Moves a task within its column or into another column.
    ///
    /// A same-column move reorders the sequence. A cross-column move removes
    /// the id from the source, inserts it into the destination and rewrites
    /// the task's status, all in one transition. The index is clamped to the
    /// destination length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] when either column is unknown,
    /// [`BoardError::TaskNotInColumn`] when the source does not list the task,
    /// or [`BoardError::TaskNotFound`] when the listed id has no task record.
    /// The board is unchanged in every case.
    pub fn move_task(&mut self, request: &MoveTaskRequest) -> BoardResult<MoveOutcome> {
        let result = self.apply_move(request);
        match &result {
            Ok(outcome) => tracing::debug!(
                task_id = %request.task_id(),
                from = %request.from_column_id(),
                to = %request.to_column_id(),
                ?outcome,
                "task moved"
            ),
            Err(err) => tracing::warn!(
                task_id = %request.task_id(),
                from = %request.from_column_id(),
                to = %request.to_column_id(),
                error = %err,
                "move skipped"
            ),
        }
        result
    }

    fn apply_move(&mut self, request: &MoveTaskRequest) -> BoardResult<MoveOutcome> {
        let source = self.require_column(request.from_column_id())?;
        let dest = self.require_column(request.to_column_id())?;
        let from_index =
            source
                .position_of(request.task_id())
                .ok_or_else(|| BoardError::TaskNotInColumn {
                    task_id: request.task_id().clone(),
                    column_id: request.from_column_id().clone(),
                })?;

        if !self.tasks.contains_key(request.task_id()) {
            return Err(BoardError::TaskNotFound(request.task_id().clone()));
        }

        if request.is_reorder() {
            let reordered = reorder(source.task_ids(), from_index, request.index())?;
            if reordered.as_slice() == source.task_ids() {
                return Ok(MoveOutcome::Unchanged);
            }
            let to_index = reordered
                .iter()
                .position(|id| id == request.task_id())
                .unwrap_or(from_index);
            self.write_sequence(request.from_column_id(), reordered);
            return Ok(MoveOutcome::Reordered {
                from_index,
                to_index,
            });
        }

        let (new_source, new_dest) = transfer(
            source.task_ids(),
            dest.task_ids(),
            from_index,
            request.index(),
            request.task_id(),
        )?;
        let to_index = request.index().min(dest.len());

        self.write_sequence(request.from_column_id(), new_source);
        self.write_sequence(request.to_column_id(), new_dest);
        if let Some(task) = self.tasks.get_mut(request.task_id()) {
            task.set_status(request.to_column_id().clone());
        }
        Ok(MoveOutcome::Transferred {
            from_index,
            to_index,
        })
    }

    /// Creates a task at the end of `column_id`.
    ///
    /// The store assigns a fresh id, stamps the creation time from its clock
    /// and sets the status to `column_id`. Capacity limits are advisory and
    /// never block creation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] when the column is unknown, or
    /// [`BoardError::Domain`] when the draft title is blank. Nothing is
    /// created in either case.
    pub fn create_task(&mut self, column_id: &ColumnId, draft: TaskDraft) -> BoardResult<Task> {
        if let Err(err) = self.require_column(column_id) {
            tracing::warn!(column_id = %column_id, "create skipped: column not found");
            return Err(err);
        }

        let task = Task::create(self.fresh_task_id(), column_id.clone(), draft, &*self.clock)?;
        let task_id = task.id().clone();
        self.tasks.insert(task_id.clone(), task.clone());
        if let Some(column) = self.column_mut(column_id) {
            let mut task_ids = column.task_ids().to_vec();
            task_ids.push(task_id.clone());
            column.replace_task_ids(task_ids);
        }
        tracing::debug!(task_id = %task_id, column_id = %column_id, "task created");
        Ok(task)
    }

    /// Merges `patch` into an existing task and returns the updated record.
    ///
    /// An empty patch returns the current record without writing anything.
    ///
    /// With the default configuration a status in the patch is written to the
    /// task without touching any column sequence, which breaks referential
    /// integrity until a matching move is made. With
    /// [`BoardConfig::reconcile_status_on_update`] set, a changed status moves
    /// the task to the end of the named column in the same transition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for an unknown task,
    /// [`BoardError::Domain`] for a blank title, or
    /// [`BoardError::ColumnNotFound`] when reconciling towards an unknown
    /// column. The task is unchanged in every case.
    pub fn update_task(&mut self, task_id: &TaskId, patch: TaskPatch) -> BoardResult<Task> {
        let Some(current) = self.tasks.get(task_id) else {
            tracing::warn!(task_id = %task_id, "update skipped: task not found");
            return Err(BoardError::TaskNotFound(task_id.clone()));
        };

        if patch.is_empty() {
            return Ok(current.clone());
        }

        let status_change = patch
            .requested_status()
            .filter(|status| *status != current.status())
            .cloned();
        let mut updated = current.clone();

        match status_change {
            Some(target) if self.config.reconcile_status_on_update => {
                updated.apply_patch(patch.without_status())?;
                self.reconcile_membership(updated, &target)
            }
            Some(target) => {
                updated.apply_patch(patch)?;
                tracing::warn!(
                    task_id = %task_id,
                    status = %target,
                    "task status edited without moving it between columns"
                );
                self.tasks.insert(task_id.clone(), updated.clone());
                Ok(updated)
            }
            None => {
                updated.apply_patch(patch)?;
                self.tasks.insert(task_id.clone(), updated.clone());
                tracing::debug!(task_id = %task_id, "task updated");
                Ok(updated)
            }
        }
    }

    /// Writes `updated` with status `target`, appending it to `target` and
    /// removing it from whichever column listed it.
    fn reconcile_membership(&mut self, mut updated: Task, target: &ColumnId) -> BoardResult<Task> {
        let dest = self.require_column(target)?;
        let task_id = updated.id().clone();

        let mut new_dest: Vec<TaskId> = dest
            .task_ids()
            .iter()
            .filter(|id| **id != task_id)
            .cloned()
            .collect();
        new_dest.push(task_id.clone());

        let stale: Vec<(ColumnId, Vec<TaskId>)> = self
            .columns
            .iter()
            .filter(|column| column.id() != target && column.contains(&task_id))
            .map(|column| {
                let remaining = column
                    .task_ids()
                    .iter()
                    .filter(|id| **id != task_id)
                    .cloned()
                    .collect();
                (column.id().clone(), remaining)
            })
            .collect();

        for (column_id, remaining) in stale {
            self.write_sequence(&column_id, remaining);
        }
        self.write_sequence(target, new_dest);
        updated.set_status(target.clone());
        self.tasks.insert(task_id.clone(), updated.clone());
        tracing::debug!(task_id = %task_id, column_id = %target, "task updated and moved");
        Ok(updated)
    }

    /// Removes a task record and every occurrence of its id from the columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when the task does not exist; the
    /// board is unchanged.
    pub fn delete_task(&mut self, task_id: &TaskId) -> BoardResult<Task> {
        let Some(task) = self.tasks.remove(task_id) else {
            tracing::warn!(task_id = %task_id, "delete skipped: task not found");
            return Err(BoardError::TaskNotFound(task_id.clone()));
        };

        let mut listings = 0_usize;
        for column in &mut self.columns {
            if column.contains(task_id) {
                listings = listings.saturating_add(1);
                let remaining = column
                    .task_ids()
                    .iter()
                    .filter(|id| *id != task_id)
                    .cloned()
                    .collect();
                column.replace_task_ids(remaining);
            }
        }
        if listings == 1 {
            tracing::debug!(task_id = %task_id, "task deleted");
        } else {
            tracing::warn!(task_id = %task_id, listings, "deleted task was not listed exactly once");
        }
        Ok(task)
    }

    /// Deletes every listed task that exists and returns how many were
    /// removed. Unknown ids are skipped.
    pub fn delete_tasks<'a>(&mut self, task_ids: impl IntoIterator<Item = &'a TaskId>) -> usize {
        task_ids
            .into_iter()
            .filter(|task_id| self.delete_task(task_id).is_ok())
            .count()
    }

    /// Projects one column for display through `filter`.
    ///
    /// Ids without a task record are skipped. Capacity is computed over the
    /// full stored sequence, not the filtered subset.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] when the column is unknown.
    pub fn column_view(
        &self,
        column_id: &ColumnId,
        filter: &TaskFilter,
    ) -> BoardResult<ColumnView<'_>> {
        let column = self.require_column(column_id)?;
        Ok(self.project(column, filter))
    }

    /// Projects every column, in board order, through `filter`.
    #[must_use]
    pub fn board_view(&self, filter: &TaskFilter) -> Vec<ColumnView<'_>> {
        self.columns
            .iter()
            .map(|column| self.project(column, filter))
            .collect()
    }

    fn project<'a>(&'a self, column: &'a Column, filter: &TaskFilter) -> ColumnView<'a> {
        let tasks = column
            .task_ids()
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .filter(|task| filter.matches(task))
            .collect();
        ColumnView {
            column,
            tasks,
            capacity: column.capacity_status(self.config.near_capacity_percent),
        }
    }

    fn require_column(&self, column_id: &ColumnId) -> BoardResult<&Column> {
        self.column(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.clone()))
    }

    fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
    }

    fn write_sequence(&mut self, column_id: &ColumnId, task_ids: Vec<TaskId>) {
        if let Some(column) = self.column_mut(column_id) {
            column.replace_task_ids(task_ids);
        }
    }

    fn fresh_task_id(&self) -> TaskId {
        loop {
            let candidate = TaskId::generate();
            if !self.tasks.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}
