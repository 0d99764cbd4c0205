//! Editor contract shared by the task, note and event services.
//!
//! # Responsibility
//! - Model what a modal form hands back: save, delete, or cancel.
//! - Route each outcome to the owning service's create/update/delete.
//!
//! # Invariants
//! - `Save` with `editing: None` creates; with `Some(id)` it replaces the
//!   editable fields of that entry.
//! - A rejected save leaves the form open; every other outcome closes it,
//!   except a delete of some entry other than the one being edited.

use crate::model::validation::ValidationError;
use crate::model::EntityId;
use crate::store::StoreResult;
use log::debug;

/// What an entity form produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome<D> {
    Save {
        editing: Option<EntityId>,
        draft: D,
    },
    Delete(EntityId),
    Cancel,
}

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome<T> {
    Created(T),
    Updated(T),
    /// Draft failed validation; nothing was written.
    Rejected(ValidationError),
    /// The edited entry no longer exists; nothing was written.
    NotFound(EntityId),
}

impl<T> SaveOutcome<T> {
    /// The saved entity, when one was written.
    pub fn entity(&self) -> Option<&T> {
        match self {
            Self::Created(entity) | Self::Updated(entity) => Some(entity),
            Self::Rejected(_) | Self::NotFound(_) => None,
        }
    }

    pub fn is_written(&self) -> bool {
        self.entity().is_some()
    }
}

/// Effect of applying one `EditorOutcome`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEffect<T> {
    Saved(SaveOutcome<T>),
    Deleted { id: EntityId, removed: bool },
    Cancelled,
}

impl<T> EditorEffect<T> {
    /// Whether the form showing `open` (or a create form, when `None`)
    /// should close after this effect.
    pub fn closes_editor(&self, open: Option<&EntityId>) -> bool {
        match self {
            Self::Saved(SaveOutcome::Rejected(_)) => false,
            Self::Saved(_) | Self::Cancelled => true,
            Self::Deleted { id, .. } => open == Some(id),
        }
    }
}

/// Create/update/delete entry points of one list feature.
pub trait EntityEditor {
    type Draft;
    type Entity;

    fn create(&mut self, draft: Self::Draft) -> StoreResult<SaveOutcome<Self::Entity>>;

    fn update(
        &mut self,
        id: &EntityId,
        draft: Self::Draft,
    ) -> StoreResult<SaveOutcome<Self::Entity>>;

    fn delete(&mut self, id: &EntityId) -> StoreResult<bool>;

    /// Applies a form outcome through `create`, `update` or `delete`.
    fn apply(
        &mut self,
        outcome: EditorOutcome<Self::Draft>,
    ) -> StoreResult<EditorEffect<Self::Entity>> {
        match outcome {
            EditorOutcome::Save {
                editing: None,
                draft,
            } => Ok(EditorEffect::Saved(self.create(draft)?)),
            EditorOutcome::Save {
                editing: Some(id),
                draft,
            } => Ok(EditorEffect::Saved(self.update(&id, draft)?)),
            EditorOutcome::Delete(id) => {
                let removed = self.delete(&id)?;
                Ok(EditorEffect::Deleted { id, removed })
            }
            EditorOutcome::Cancel => {
                debug!("event=editor_cancel module=service status=ok");
                Ok(EditorEffect::Cancelled)
            }
        }
    }
}

/// Logs a rejected draft and wraps the reason.
pub(crate) fn rejected<T>(list_key: &str, reason: ValidationError) -> SaveOutcome<T> {
    debug!(
        "event=editor_save module=service status=rejected key={} reason={}",
        list_key, reason
    );
    SaveOutcome::Rejected(reason)
}
