//! Per-feature use-case services.
//!
//! # Responsibility
//! - Express every user action as "compute a new full list, then replace".
//! - Keep screens decoupled from storage keys and serialization.
//!
//! # Invariants
//! - Each service owns exactly one storage key.
//! - Rejected drafts and unknown ids never write to the store.

use crate::model::validation::ValidationError;
use crate::model::{EntityId, Identified};
use crate::repo::list_repo::PersistedList;
use crate::store::{KeyValueStore, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod editor;
pub mod event_service;
pub mod note_service;
pub mod task_service;
pub mod todo_service;

use editor::{rejected, SaveOutcome};

pub const TODOS_KEY: &str = "todos";
pub const TASKS_KEY: &str = "tasks";
pub const NOTES_KEY: &str = "notes";
pub const EVENTS_KEY: &str = "events";

/// Replaces the editable fields of one entry through `change`.
fn update_entry<T, S>(
    list: &mut PersistedList<'_, T, S>,
    id: &EntityId,
    change: impl FnOnce(&T) -> Result<T, ValidationError>,
) -> StoreResult<SaveOutcome<T>>
where
    T: Identified + Clone + Serialize + DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let mut rejection = None;
    let updated = list.update_by_id(id, |entry| {
        change(entry).map_err(|reason| rejection = Some(reason)).ok()
    })?;

    if let Some(reason) = rejection {
        return Ok(rejected(list.key(), reason));
    }
    Ok(match updated {
        Some(entry) => SaveOutcome::Updated(entry),
        None => SaveOutcome::NotFound(id.clone()),
    })
}
