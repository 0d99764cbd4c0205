//! Todo list use-cases.
//!
//! Todos have no modal editor: titles come from the inline input, and the
//! remaining actions are quick toggles and deletes.

use crate::model::todo::Todo;
use crate::model::{now_epoch_ms, EntityId};
use crate::repo::list_repo::PersistedList;
use crate::service::editor::{rejected, SaveOutcome};
use crate::service::TODOS_KEY;
use crate::store::{KeyValueStore, StoreResult};
use crate::view::todo_view::{todo_counts, TodoCounts};
use log::info;

pub struct TodoService<'s, S: KeyValueStore + ?Sized> {
    list: PersistedList<'s, Todo, S>,
}

impl<'s, S: KeyValueStore + ?Sized> TodoService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            list: PersistedList::new(store, TODOS_KEY),
        }
    }

    pub fn todos(&mut self) -> StoreResult<&[Todo]> {
        self.list.load()
    }

    /// Adds a todo at the top of the list.
    pub fn add(&mut self, title: &str) -> StoreResult<SaveOutcome<Todo>> {
        let todo = match Todo::new(title, now_epoch_ms()) {
            Ok(todo) => todo,
            Err(reason) => return Ok(rejected(TODOS_KEY, reason)),
        };
        self.list.prepend(todo.clone())?;
        info!(
            "event=todo_add module=service status=ok id={}",
            todo.id
        );
        Ok(SaveOutcome::Created(todo))
    }

    /// Flips `completed`. Returns the updated todo, or `None` if unknown.
    pub fn toggle(&mut self, id: &EntityId) -> StoreResult<Option<Todo>> {
        self.list.update_by_id(id, |todo| Some(todo.toggled()))
    }

    pub fn delete(&mut self, id: &EntityId) -> StoreResult<bool> {
        self.list.remove_by_id(id)
    }

    /// Removes every completed todo and returns how many were removed.
    pub fn clear_completed(&mut self) -> StoreResult<usize> {
        let removed = self.list.retain(|todo| !todo.completed)?;
        info!(
            "event=todo_clear_completed module=service status=ok removed={}",
            removed
        );
        Ok(removed)
    }

    /// Drops the whole list from the store.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.list.clear()
    }

    pub fn counts(&mut self) -> StoreResult<TodoCounts> {
        Ok(todo_counts(self.list.load()?))
    }
}
