//! Shared world state for board behaviour scenarios.

use std::sync::Arc;

use chrono::Utc;
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    board::{
        domain::{BoardSnapshot, Column, ColumnId, PersistedTaskData, Task, TaskId},
        services::{BoardConfig, BoardError, BoardStore},
    },
    drag::{DragDropController, PreviewUpdate},
};

/// Controller type used by the BDD world.
pub type TestController = DragDropController<DefaultClock>;

/// Column shape declared by `Given` steps.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub id: String,
    pub task_ids: Vec<String>,
    pub max_tasks: Option<usize>,
}

/// Scenario world for board and drag-and-drop behaviour tests.
pub struct BoardWorld {
    pub layout: Vec<ColumnLayout>,
    pub controller: TestController,
    pub last_created: Option<Task>,
    pub last_error: Option<BoardError>,
    pub last_preview: Option<PreviewUpdate>,
}

impl BoardWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: Vec::new(),
            controller: DragDropController::new(BoardStore::new(Arc::new(DefaultClock))),
            last_created: None,
            last_error: None,
            last_preview: None,
        }
    }

    /// Rebuilds the board from the declared layout.
    pub fn rebuild(&mut self) -> Result<(), eyre::Report> {
        let columns = self
            .layout
            .iter()
            .map(|layout| {
                let column = Column::new(layout.id.as_str(), layout.id.to_uppercase(), "#888")
                    .with_task_ids(layout.task_ids.iter().map(String::as_str));
                match layout.max_tasks {
                    Some(max) => column.with_max_tasks(max),
                    None => column,
                }
            })
            .collect();
        let tasks: Vec<Task> = self
            .layout
            .iter()
            .flat_map(|layout| {
                layout
                    .task_ids
                    .iter()
                    .map(move |id| seeded_task(id, &layout.id))
            })
            .collect();
        let snapshot = BoardSnapshot::new(columns, tasks)?;
        let store = BoardStore::from_snapshot(snapshot, BoardConfig::default(), Arc::new(DefaultClock))?;
        self.controller = DragDropController::new(store);
        Ok(())
    }

    /// Returns the declared layout entry for `column`.
    pub fn layout_mut(&mut self, column: &str) -> Result<&mut ColumnLayout, eyre::Report> {
        self.layout
            .iter_mut()
            .find(|layout| layout.id == column)
            .ok_or_else(|| eyre::eyre!("column {column} was not declared in the scenario"))
    }

    /// Returns the ids listed by `column` on the live board.
    pub fn listed(&self, column: &str) -> Result<Vec<String>, eyre::Report> {
        let column_ref = self
            .controller
            .store()
            .column(&ColumnId::new(column))
            .ok_or_else(|| eyre::eyre!("column {column} does not exist on the board"))?;
        Ok(column_ref.task_ids().iter().map(ToString::to_string).collect())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn seeded_task(id: &str, column: &str) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title: format!("Task {id}"),
        description: None,
        status: ColumnId::new(column),
        priority: None,
        assignee: None,
        tags: Vec::new(),
        created_at: Utc::now(),
        due_date: None,
    })
}

/// Splits a comma-separated scenario list, dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
