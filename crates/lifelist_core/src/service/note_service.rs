//! Note list use-cases.
//!
//! # Invariants
//! - New notes are prepended.
//! - Every successful edit bumps `updated_at`.

use crate::model::note::{Note, NoteColor, NoteDraft};
use crate::model::{now_epoch_ms, EntityId};
use crate::repo::list_repo::PersistedList;
use crate::service::editor::{rejected, EntityEditor, SaveOutcome};
use crate::service::{update_entry, NOTES_KEY};
use crate::store::{KeyValueStore, StoreResult};
use crate::view::note_view::{note_columns, NoteColumns};
use log::info;

pub struct NoteService<'s, S: KeyValueStore + ?Sized> {
    list: PersistedList<'s, Note, S>,
}

impl<'s, S: KeyValueStore + ?Sized> NoteService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            list: PersistedList::new(store, NOTES_KEY),
        }
    }

    pub fn notes(&mut self) -> StoreResult<&[Note]> {
        self.list.load()
    }

    /// Notes split into the two masonry columns.
    pub fn columns(&mut self) -> StoreResult<NoteColumns<'_>> {
        Ok(note_columns(self.list.load()?))
    }

    /// Entry to pre-fill the editor with.
    pub fn get(&mut self, id: &EntityId) -> StoreResult<Option<&Note>> {
        self.list.find(id)
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.list.clear()
    }
}

impl<S: KeyValueStore + ?Sized> EntityEditor for NoteService<'_, S> {
    type Draft = NoteDraft;
    type Entity = Note;

    fn create(&mut self, draft: NoteDraft) -> StoreResult<SaveOutcome<Note>> {
        let note = match Note::from_draft(draft, now_epoch_ms()) {
            Ok(note) => note,
            Err(reason) => return Ok(rejected(NOTES_KEY, reason)),
        };
        self.list.prepend(note.clone())?;
        info!(
            "event=note_create module=service status=ok id={} color={}",
            note.id,
            note.color.palette().map_or("custom", NoteColor::name)
        );
        Ok(SaveOutcome::Created(note))
    }

    fn update(&mut self, id: &EntityId, draft: NoteDraft) -> StoreResult<SaveOutcome<Note>> {
        if let Err(reason) = draft.validate() {
            return Ok(rejected(NOTES_KEY, reason));
        }
        let now = now_epoch_ms();
        update_entry(&mut self.list, id, |note| note.with_draft(draft, now))
    }

    fn delete(&mut self, id: &EntityId) -> StoreResult<bool> {
        self.list.remove_by_id(id)
    }
}
