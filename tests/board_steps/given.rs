//! Given steps for board behaviour scenarios.

use super::world::{BoardWorld, ColumnLayout, split_list};
use rstest_bdd_macros::given;

#[given(r#"a board with columns "{columns}""#)]
fn board_with_columns(world: &mut BoardWorld, columns: String) -> Result<(), eyre::Report> {
    world.layout = split_list(&columns)
        .into_iter()
        .map(|id| ColumnLayout {
            id,
            task_ids: Vec::new(),
            max_tasks: None,
        })
        .collect();
    world.rebuild()
}

#[given(r#"column "{column}" holds tasks "{tasks}""#)]
fn column_holds_tasks(
    world: &mut BoardWorld,
    column: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    world.layout_mut(&column)?.task_ids = split_list(&tasks);
    world.rebuild()
}

#[given(r#"column "{column}" allows at most {max:usize} tasks"#)]
fn column_allows_at_most(
    world: &mut BoardWorld,
    column: String,
    max: usize,
) -> Result<(), eyre::Report> {
    world.layout_mut(&column)?.max_tasks = Some(max);
    world.rebuild()
}
