//! Unit tests for the display filter.

use crate::board::domain::{
    ColumnId, PersistedTaskData, Priority, Task, TaskFilter, TaskId, filter_tasks,
};
use chrono::Utc;
use rstest::{fixture, rstest};

fn task(
    id: &str,
    title: &str,
    description: Option<&str>,
    priority: Option<Priority>,
    assignee: Option<&str>,
    tags: &[&str],
) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        description: description.map(str::to_owned),
        status: ColumnId::new("todo"),
        priority,
        assignee: assignee.map(str::to_owned),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        created_at: Utc::now(),
        due_date: None,
    })
}

#[fixture]
fn tasks() -> Vec<Task> {
    vec![
        task(
            "t1",
            "Fix login bug",
            Some("Session cookie expires early"),
            Some(Priority::High),
            Some("AB"),
            &["bug", "auth"],
        ),
        task("t2", "Write docs", None, Some(Priority::Low), None, &["docs"]),
        task(
            "t3",
            "Refactor parser",
            Some("Handle ABC delimiters"),
            None,
            Some("https://example.com/cd.png"),
            &[],
        ),
        task("t4", "Ship release", None, Some(Priority::Urgent), Some("AB"), &["bug"]),
    ]
}

fn ids(selected: &[&Task]) -> Vec<String> {
    selected.iter().map(|task| task.id().to_string()).collect()
}

#[rstest]
fn empty_filter_returns_all_tasks_in_order(tasks: Vec<Task>) {
    let filter = TaskFilter::new();

    let selected = filter_tasks(&tasks, &filter);

    assert!(filter.is_unrestricted());
    assert_eq!(ids(&selected), ["t1", "t2", "t3", "t4"]);
}

#[rstest]
fn empty_search_imposes_no_restriction(tasks: Vec<Task>) {
    let filter = TaskFilter::new().with_search("");

    assert!(filter.is_unrestricted());
    assert_eq!(filter_tasks(&tasks, &filter).len(), 4);
}

#[rstest]
fn priority_filter_excludes_tasks_without_priority(tasks: Vec<Task>) {
    let filter = TaskFilter::new().with_priorities([Priority::High, Priority::Urgent]);

    assert_eq!(ids(&filter_tasks(&tasks, &filter)), ["t1", "t4"]);
}

#[rstest]
fn tag_filter_requires_any_shared_tag(tasks: Vec<Task>) {
    let filter = TaskFilter::new().with_tags(["docs", "auth"]);

    assert_eq!(ids(&filter_tasks(&tasks, &filter)), ["t1", "t2"]);
}

#[rstest]
fn assignee_filter_matches_exact_values(tasks: Vec<Task>) {
    let filter = TaskFilter::new().with_assignees(["https://example.com/cd.png"]);

    assert_eq!(ids(&filter_tasks(&tasks, &filter)), ["t3"]);
}

#[rstest]
#[case("abc", &["t3"])]
#[case("BUG", &["t1"])]
#[case("cookie", &["t1"])]
#[case("r", &["t1", "t2", "t3", "t4"])]
#[case("nothing matches", &[])]
fn search_matches_title_or_description_ignoring_case(
    tasks: Vec<Task>,
    #[case] query: &str,
    #[case] expected: &[&str],
) {
    let filter = TaskFilter::new().with_search(query);

    assert_eq!(ids(&filter_tasks(&tasks, &filter)), expected);
}

#[rstest]
fn criteria_combine_with_and(tasks: Vec<Task>) {
    let filter = TaskFilter::new()
        .with_tags(["bug"])
        .with_assignees(["AB"])
        .with_search("ship");

    assert_eq!(ids(&filter_tasks(&tasks, &filter)), ["t4"]);
}

#[rstest]
fn filter_preserves_caller_order(tasks: Vec<Task>) {
    let reversed: Vec<&Task> = tasks.iter().rev().collect();
    let filter = TaskFilter::new().with_tags(["bug"]);

    let selected = filter_tasks(reversed, &filter);

    assert_eq!(ids(&selected), ["t4", "t1"]);
}
