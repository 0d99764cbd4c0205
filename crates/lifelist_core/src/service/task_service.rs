//! Task list use-cases.
//!
//! # Invariants
//! - New tasks are prepended and start incomplete.
//! - Editing keeps `id`, `completed` and `created_at`.

use crate::model::task::{Task, TaskDraft};
use crate::model::{now_epoch_ms, EntityId};
use crate::repo::list_repo::PersistedList;
use crate::service::editor::{rejected, EntityEditor, SaveOutcome};
use crate::service::{update_entry, TASKS_KEY};
use crate::store::{KeyValueStore, StoreResult};
use crate::view::task_view::{task_counts, task_display, TaskCounts, TaskFilter};
use log::info;

pub struct TaskService<'s, S: KeyValueStore + ?Sized> {
    list: PersistedList<'s, Task, S>,
}

impl<'s, S: KeyValueStore + ?Sized> TaskService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            list: PersistedList::new(store, TASKS_KEY),
        }
    }

    /// Tasks in stored order.
    pub fn tasks(&mut self) -> StoreResult<&[Task]> {
        self.list.load()
    }

    /// Tasks as the screen shows them under `filter`.
    pub fn display(&mut self, filter: &TaskFilter) -> StoreResult<Vec<&Task>> {
        Ok(task_display(self.list.load()?, filter))
    }

    pub fn toggle(&mut self, id: &EntityId) -> StoreResult<Option<Task>> {
        self.list.update_by_id(id, |task| Some(task.toggled()))
    }

    /// Entry to pre-fill the editor with.
    pub fn get(&mut self, id: &EntityId) -> StoreResult<Option<&Task>> {
        self.list.find(id)
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.list.clear()
    }

    pub fn counts(&mut self) -> StoreResult<TaskCounts> {
        Ok(task_counts(self.list.load()?))
    }
}

impl<S: KeyValueStore + ?Sized> EntityEditor for TaskService<'_, S> {
    type Draft = TaskDraft;
    type Entity = Task;

    fn create(&mut self, draft: TaskDraft) -> StoreResult<SaveOutcome<Task>> {
        let task = match Task::from_draft(draft, now_epoch_ms()) {
            Ok(task) => task,
            Err(reason) => return Ok(rejected(TASKS_KEY, reason)),
        };
        self.list.prepend(task.clone())?;
        info!(
            "event=task_create module=service status=ok id={} priority={}",
            task.id,
            task.priority.label()
        );
        Ok(SaveOutcome::Created(task))
    }

    fn update(&mut self, id: &EntityId, draft: TaskDraft) -> StoreResult<SaveOutcome<Task>> {
        if let Err(reason) = draft.validate() {
            return Ok(rejected(TASKS_KEY, reason));
        }
        update_entry(&mut self.list, id, |task| task.with_draft(draft))
    }

    fn delete(&mut self, id: &EntityId) -> StoreResult<bool> {
        self.list.remove_by_id(id)
    }
}
