//! Display filter over task records.
//!
//! Filtering is read-only and order-preserving; it never changes stored
//! column order.

use super::{Priority, Task};

/// Criteria selecting which tasks to display.
///
/// Every non-empty criterion must hold (logical AND). An empty criterion
/// imposes no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    priorities: Vec<Priority>,
    tags: Vec<String>,
    assignees: Vec<String>,
    search: Option<String>,
}

impl TaskFilter {
    /// Creates a filter that admits every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits only tasks whose priority is one of `priorities`.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = priorities.into_iter().collect();
        self
    }

    /// Admits only tasks carrying at least one of `tags`.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Admits only tasks assigned to one of `assignees`.
    #[must_use]
    pub fn with_assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = assignees.into_iter().map(Into::into).collect();
        self
    }

    /// Admits only tasks whose title or description contains `query`,
    /// ignoring case.
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Returns `true` when no criterion is active.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.priorities.is_empty()
            && self.tags.is_empty()
            && self.assignees.is_empty()
            && self.search.as_deref().is_none_or(str::is_empty)
    }

    /// Returns `true` when `task` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_priority(task)
            && self.matches_tags(task)
            && self.matches_assignee(task)
            && self.matches_search(task)
    }

    fn matches_priority(&self, task: &Task) -> bool {
        if self.priorities.is_empty() {
            return true;
        }
        task.priority()
            .is_some_and(|priority| self.priorities.contains(&priority))
    }

    fn matches_tags(&self, task: &Task) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        task.tags().iter().any(|tag| self.tags.contains(tag))
    }

    fn matches_assignee(&self, task: &Task) -> bool {
        if self.assignees.is_empty() {
            return true;
        }
        task.assignee()
            .is_some_and(|assignee| self.assignees.iter().any(|wanted| wanted == assignee))
    }

    fn matches_search(&self, task: &Task) -> bool {
        let Some(query) = self.search.as_deref().filter(|query| !query.is_empty()) else {
            return true;
        };
        let needle = query.to_lowercase();
        task.title().to_lowercase().contains(&needle)
            || task
                .description()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }
}

/// Returns the tasks admitted by `filter`, in the order given.
#[must_use]
pub fn filter_tasks<'a, I>(tasks: I, filter: &TaskFilter) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks.into_iter().filter(|task| filter.matches(task)).collect()
}
