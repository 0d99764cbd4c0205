//! Task filtering and display ordering.
//!
//! # Invariants
//! - Status and priority filters compose with logical AND.
//! - Display order: incomplete before completed, then priority rank
//!   (high, medium, low), then newest `created_at` first.

use crate::model::task::{Priority, Task};
use std::cmp::Ordering;

/// Completion filter tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Priority filter chip; `All` disables priority filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority == priority,
        }
    }
}

/// Current filter selection on the task screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(task) && self.priority.matches(task)
    }

    /// Whether any filter narrows the list.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// Header counters on the task screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub active: usize,
    pub high_priority_active: usize,
}

pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Display comparator for two tasks.
pub fn compare_for_display(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Filtered and ordered task list as rendered.
pub fn task_display<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    let mut visible = filter_tasks(tasks, filter);
    visible.sort_by(|a, b| compare_for_display(a, b));
    visible
}

pub fn task_counts(tasks: &[Task]) -> TaskCounts {
    tasks
        .iter()
        .filter(|task| !task.completed)
        .fold(TaskCounts::default(), |mut counts, task| {
            counts.active += 1;
            if task.priority == Priority::High {
                counts.high_priority_active += 1;
            }
            counts
        })
}
