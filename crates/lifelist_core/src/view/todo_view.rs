use crate::model::todo::Todo;

/// Header counters on the todo screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoCounts {
    pub active: usize,
    pub completed: usize,
}

pub fn todo_counts(todos: &[Todo]) -> TodoCounts {
    let completed = todos.iter().filter(|todo| todo.completed).count();
    TodoCounts {
        active: todos.len() - completed,
        completed,
    }
}
