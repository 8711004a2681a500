//! When steps for board behaviour scenarios.

use super::world::{BoardWorld, split_list};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::{
    domain::{ColumnId, TaskDraft, TaskId, TaskPatch},
    services::MoveTaskRequest,
};

#[when(r#"task "{task}" is moved from "{from}" to "{to}" at index {index:usize}"#)]
fn move_task(world: &mut BoardWorld, task: String, from: String, to: String, index: usize) {
    let request = MoveTaskRequest::new(task.as_str(), from.as_str(), to.as_str(), index);
    world.last_error = world.controller.store_mut().move_task(&request).err();
}

#[when(r#"a task titled "{title}" is created in column "{column}""#)]
fn create_task(world: &mut BoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let created = world
        .controller
        .store_mut()
        .create_task(&ColumnId::new(column), TaskDraft::new(title))
        .wrap_err("create task in scenario")?;
    world.last_created = Some(created);
    Ok(())
}

#[when(r#"task "{task}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, task: String) {
    world.last_error = world
        .controller
        .store_mut()
        .delete_task(&TaskId::new(task))
        .err();
}

#[when(r#"task "{task}" has its status edited to "{column}""#)]
fn edit_status(world: &mut BoardWorld, task: String, column: String) {
    world.last_error = world
        .controller
        .store_mut()
        .update_task(&TaskId::new(task), TaskPatch::new().status(column.as_str()))
        .err();
}

#[when(r#"task "{task}" is picked up from column "{column}""#)]
fn pick_up(world: &mut BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    world
        .controller
        .begin_drag(task.as_str(), column.as_str())
        .wrap_err("begin drag in scenario")
}

#[when(r#"the pointer moves over column "{column}" at {pointer:u32} with cards at "{cards}""#)]
fn pointer_moves(
    world: &mut BoardWorld,
    column: String,
    pointer: u32,
    cards: String,
) -> Result<(), eyre::Report> {
    let midpoints = split_list(&cards)
        .iter()
        .map(|raw| raw.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("card midpoints must be numbers")?;
    let update =
        world
            .controller
            .update_drag_preview(&ColumnId::new(column), f64::from(pointer), &midpoints);
    world.last_preview = Some(update);
    Ok(())
}

#[when("the task is dropped")]
fn drop_task(world: &mut BoardWorld) {
    world.last_error = world.controller.commit_drag().and_then(Result::err);
}

#[when("the drag is cancelled")]
fn cancel_drag(world: &mut BoardWorld) {
    world.controller.cancel_drag();
}
