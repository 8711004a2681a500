//! Then steps for board behaviour scenarios.

use super::world::{BoardWorld, split_list};
use rstest_bdd_macros::then;
use taskboard::{
    board::domain::{CapacityStatus, ColumnId, IntegrityViolation, TaskFilter, TaskId},
    drag::PreviewUpdate,
};

#[then(r#"column "{column}" lists "{tasks}""#)]
fn column_lists(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let listed = world.listed(&column)?;
    let expected = split_list(&tasks);
    if listed != expected {
        return Err(eyre::eyre!(
            "column {column}: expected {expected:?}, found {listed:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let listed = world.listed(&column)?;
    eyre::ensure!(listed.is_empty(), "column {column} still lists {listed:?}");
    Ok(())
}

#[then(r#"task "{task}" has status "{column}""#)]
fn task_has_status(world: &BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    let record = world
        .controller
        .store()
        .task(&TaskId::new(task.as_str()))
        .ok_or_else(|| eyre::eyre!("task {task} does not exist"))?;
    eyre::ensure!(
        record.status().as_str() == column,
        "task {task} has status {}",
        record.status()
    );
    Ok(())
}

#[then(r#"task "{task}" no longer exists"#)]
fn task_no_longer_exists(world: &BoardWorld, task: String) -> Result<(), eyre::Report> {
    let id = TaskId::new(task.as_str());
    eyre::ensure!(
        world.controller.store().task(&id).is_none(),
        "task {task} still has a record"
    );
    eyre::ensure!(
        world.controller.store().column_of(&id).is_none(),
        "task {task} is still listed"
    );
    Ok(())
}

#[then(r#"the new task is last in column "{column}""#)]
fn new_task_is_last(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let created = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task was created in this scenario"))?;
    let listed = world.listed(&column)?;
    eyre::ensure!(
        listed.last().map(String::as_str) == Some(created.id().as_str()),
        "expected {} at the end of {listed:?}",
        created.id()
    );
    Ok(())
}

#[then(r#"the new task has status "{column}""#)]
fn new_task_has_status(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let created = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task was created in this scenario"))?;
    eyre::ensure!(created.status().as_str() == column);
    Ok(())
}

#[then("the board has no integrity violations")]
fn no_integrity_violations(world: &BoardWorld) -> Result<(), eyre::Report> {
    let violations = world.controller.store().verify_integrity();
    eyre::ensure!(violations.is_empty(), "violations: {violations:?}");
    Ok(())
}

#[then(r#"the board reports a status mismatch for task "{task}""#)]
fn reports_status_mismatch(world: &BoardWorld, task: String) -> Result<(), eyre::Report> {
    let id = TaskId::new(task.as_str());
    let found = world
        .controller
        .store()
        .verify_integrity()
        .iter()
        .any(|violation| {
            matches!(violation, IntegrityViolation::StatusMismatch { task_id, .. } if *task_id == id)
        });
    eyre::ensure!(found, "no status mismatch reported for {task}");
    Ok(())
}

#[then("the last command was rejected")]
fn last_command_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_error.is_some(),
        "expected the last command to be rejected"
    );
    Ok(())
}

#[then(r#"column "{column}" reports capacity "{status}""#)]
fn column_reports_capacity(
    world: &BoardWorld,
    column: String,
    status: String,
) -> Result<(), eyre::Report> {
    let view = world
        .controller
        .store()
        .column_view(&ColumnId::new(column.as_str()), &TaskFilter::new())?;
    let expected = match status.as_str() {
        "normal" => CapacityStatus::Normal,
        "near" => CapacityStatus::Near,
        "exceeded" => CapacityStatus::Exceeded,
        other => return Err(eyre::eyre!("unknown capacity status in scenario: {other}")),
    };
    eyre::ensure!(
        view.capacity == expected,
        "column {column} reports {}",
        view.capacity.as_str()
    );
    Ok(())
}

#[then("the last preview update was unchanged")]
fn last_preview_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_preview == Some(PreviewUpdate::Unchanged),
        "last preview update was {:?}",
        world.last_preview
    );
    Ok(())
}

#[then(r#"the preview points at column "{column}" index {index:usize}"#)]
fn preview_points_at(world: &BoardWorld, column: String, index: usize) -> Result<(), eyre::Report> {
    let preview = world
        .controller
        .session()
        .preview()
        .ok_or_else(|| eyre::eyre!("no drop preview recorded"))?;
    eyre::ensure!(preview.column_id.as_str() == column && preview.index == index);
    Ok(())
}

#[then("no drag is in progress")]
fn no_drag_in_progress(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!world.controller.session().is_dragging());
    Ok(())
}
