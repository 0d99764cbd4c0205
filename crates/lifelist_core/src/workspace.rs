//! The four list features bound to one store.
//!
//! # Responsibility
//! - Construct every feature service over a single injected store.
//! - Provide the home-screen summary across all lists.
//!
//! # Invariants
//! - Each feature uses its own storage key; features never read each
//!   other's lists.

use crate::service::event_service::EventService;
use crate::service::note_service::NoteService;
use crate::service::task_service::TaskService;
use crate::service::todo_service::TodoService;
use crate::store::{KeyValueStore, StoreResult};

/// Item counts across all lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub todos: usize,
    pub active_todos: usize,
    pub tasks: usize,
    pub active_tasks: usize,
    pub notes: usize,
    pub events: usize,
    pub reminders: usize,
}

pub struct LifeList<'s, S: KeyValueStore + ?Sized> {
    pub todos: TodoService<'s, S>,
    pub tasks: TaskService<'s, S>,
    pub notes: NoteService<'s, S>,
    pub events: EventService<'s, S>,
}

impl<'s, S: KeyValueStore + ?Sized> LifeList<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            todos: TodoService::new(store),
            tasks: TaskService::new(store),
            notes: NoteService::new(store),
            events: EventService::new(store),
        }
    }

    /// Loads every list (if not yet loaded) and counts its entries.
    pub fn summary(&mut self) -> StoreResult<ListSummary> {
        let todo_counts = self.todos.counts()?;
        let task_counts = self.tasks.counts()?;
        Ok(ListSummary {
            todos: self.todos.todos()?.len(),
            active_todos: todo_counts.active,
            tasks: self.tasks.tasks()?.len(),
            active_tasks: task_counts.active,
            notes: self.notes.notes()?.len(),
            events: self.events.events()?.len(),
            reminders: self.events.reminder_count()?,
        })
    }
}
