//! Persisted list container.
//!
//! # Responsibility
//! - Bind one typed list to one store key.
//! - Load lazily on first access, then mirror every change to the store.
//!
//! # Invariants
//! - `replace` is the only write path; every mutation helper computes a new
//!   full list and hands it to `replace`.
//! - The in-memory list changes only after the store write succeeded.
//! - Once loaded, the container never returns to the uninitialized state;
//!   `clear` leaves it loaded with an empty list.
//! - Stored entries that fail to decode are skipped with a `warn` event
//!   naming their index, and are written back verbatim after the typed
//!   entries on every later write. They are only dropped by `clear`.
//! - A stored payload that is not a JSON array loads as an empty list and
//!   blocks every write with `StoreError::Corrupt` until `clear`.

use crate::model::{EntityId, Identified};
use crate::store::{KeyValueStore, StoreError, StoreResult};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle state of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Uninitialized,
    Loaded,
}

/// One named list mirrored wholesale into a key-value store.
pub struct PersistedList<'s, T, S: KeyValueStore + ?Sized> {
    store: &'s S,
    key: &'static str,
    items: Option<Vec<T>>,
    unreadable: Vec<Value>,
    corrupt: bool,
}

struct Decoded<T> {
    items: Vec<T>,
    unreadable: Vec<Value>,
    corrupt: bool,
}

impl<T> Decoded<T> {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            unreadable: Vec::new(),
            corrupt: false,
        }
    }
}

impl<'s, T, S> PersistedList<'s, T, S>
where
    T: Clone + Serialize + DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    /// Creates an unloaded container for `key`. Nothing is read yet.
    pub fn new(store: &'s S, key: &'static str) -> Self {
        Self {
            store,
            key,
            items: None,
            unreadable: Vec::new(),
            corrupt: false,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn state(&self) -> ListState {
        if self.items.is_some() {
            ListState::Loaded
        } else {
            ListState::Uninitialized
        }
    }

    /// Returns the current list, reading the store on first access.
    pub fn load(&mut self) -> StoreResult<&[T]> {
        Ok(self.loaded()?.as_slice())
    }

    /// Number of stored entries that could not be decoded and are carried
    /// through writes untouched.
    pub fn unreadable_count(&self) -> usize {
        self.unreadable.len()
    }

    /// Whether the stored payload is not a list at all.
    pub fn is_corrupt(&self) -> bool {
        self.corrupt
    }

    /// Replaces the whole list and writes it to the store.
    ///
    /// Undecodable stored entries are appended unchanged after `items`.
    pub fn replace(&mut self, items: Vec<T>) -> StoreResult<()> {
        self.loaded()?;
        if self.corrupt {
            warn!(
                "event=list_write module=repo status=refused key={} error_code=corrupt_payload",
                self.key
            );
            return Err(StoreError::Corrupt {
                key: self.key.to_string(),
            });
        }
        let payload = self.encode(&items)?;
        self.store.set(self.key, &payload)?;
        debug!(
            "event=list_write module=repo status=ok key={} count={} bytes={}",
            self.key,
            items.len(),
            payload.len()
        );
        self.items = Some(items);
        Ok(())
    }

    /// Removes the key from the store and leaves an empty loaded list.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.store.delete(self.key)?;
        info!(
            "event=list_clear module=repo status=ok key={} dropped_unreadable={}",
            self.key,
            self.unreadable.len()
        );
        self.items = Some(Vec::new());
        self.unreadable.clear();
        self.corrupt = false;
        Ok(())
    }

    /// Writes `item` as the new first entry.
    pub fn prepend(&mut self, item: T) -> StoreResult<()> {
        let current = self.loaded()?;
        let mut next = Vec::with_capacity(current.len() + 1);
        next.push(item);
        next.extend(current.iter().cloned());
        self.replace(next)
    }

    /// Writes `item` as the new last entry.
    pub fn append(&mut self, item: T) -> StoreResult<()> {
        let mut next = self.loaded()?.clone();
        next.push(item);
        self.replace(next)
    }

    /// Drops every entry for which `keep` returns false.
    ///
    /// Returns the number of removed entries. Nothing is written when no
    /// entry is removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> StoreResult<usize> {
        let current = self.loaded()?;
        let next: Vec<T> = current.iter().filter(|item| keep(item)).cloned().collect();
        let removed = current.len() - next.len();
        if removed > 0 {
            self.replace(next)?;
        }
        Ok(removed)
    }

    fn loaded(&mut self) -> StoreResult<&mut Vec<T>> {
        if self.items.is_none() {
            let decoded = self.read_from_store()?;
            self.unreadable = decoded.unreadable;
            self.corrupt = decoded.corrupt;
            self.items = Some(decoded.items);
        }
        Ok(self.items.get_or_insert_with(Vec::new))
    }

    fn encode(&self, items: &[T]) -> StoreResult<String> {
        let encode_error = |source: serde_json::Error| StoreError::Encode {
            key: self.key.to_string(),
            source,
        };
        if self.unreadable.is_empty() {
            return serde_json::to_string(items).map_err(encode_error);
        }

        let mut values = items
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()
            .map_err(encode_error)?;
        values.extend(self.unreadable.iter().cloned());
        serde_json::to_string(&values).map_err(encode_error)
    }

    fn read_from_store(&self) -> StoreResult<Decoded<T>> {
        let Some(raw) = self.store.get(self.key)? else {
            debug!(
                "event=list_load module=repo status=ok key={} count=0 source=empty",
                self.key
            );
            return Ok(Decoded::empty());
        };

        let values = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(values) => values,
            Err(err) => {
                warn!(
                    "event=list_load module=repo status=fallback key={} error_code=not_a_list line={} column={}",
                    self.key,
                    err.line(),
                    err.column()
                );
                return Ok(Decoded {
                    corrupt: true,
                    ..Decoded::empty()
                });
            }
        };

        let mut decoded = Decoded::empty();
        for (index, value) in values.into_iter().enumerate() {
            match T::deserialize(&value) {
                Ok(item) => decoded.items.push(item),
                Err(_) => {
                    warn!(
                        "event=list_load module=repo status=partial key={} error_code=entry_decode_failed index={}",
                        self.key, index
                    );
                    decoded.unreadable.push(value);
                }
            }
        }
        info!(
            "event=list_load module=repo status=ok key={} count={} unreadable={}",
            self.key,
            decoded.items.len(),
            decoded.unreadable.len()
        );
        Ok(decoded)
    }
}

impl<T, S> PersistedList<'_, T, S>
where
    T: Identified + Clone + Serialize + DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    /// Finds one entry by id.
    pub fn find(&mut self, id: &EntityId) -> StoreResult<Option<&T>> {
        Ok(self.loaded()?.iter().find(|item| item.id() == id))
    }

    /// Replaces the entry matching `id` with `change(entry)`.
    ///
    /// Returns the new entry, or `None` without writing when `id` is absent
    /// or `change` declines by returning `None`. Every other entry is kept
    /// as-is and in place.
    pub fn update_by_id(
        &mut self,
        id: &EntityId,
        change: impl FnOnce(&T) -> Option<T>,
    ) -> StoreResult<Option<T>> {
        let current = self.loaded()?;
        let Some(position) = current.iter().position(|item| item.id() == id) else {
            debug!(
                "event=list_update module=repo status=not_found key={} id={}",
                self.key, id
            );
            return Ok(None);
        };
        let Some(updated) = change(&current[position]) else {
            return Ok(None);
        };

        let mut next = current.clone();
        next[position] = updated.clone();
        self.replace(next)?;
        Ok(Some(updated))
    }

    /// Removes the entry matching `id`, keeping the order of the rest.
    ///
    /// Returns whether an entry was removed; an absent id writes nothing.
    pub fn remove_by_id(&mut self, id: &EntityId) -> StoreResult<bool> {
        let removed = self.retain(|item| item.id() != id)?;
        if removed == 0 {
            debug!(
                "event=list_delete module=repo status=not_found key={} id={}",
                self.key, id
            );
        }
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ListState, PersistedList};
    use crate::model::todo::Todo;
    use crate::model::EntityId;
    use crate::store::{KeyValueStore, MemoryKvStore, StoreError};

    fn todo(id: &str, title: &str) -> Todo {
        Todo {
            id: EntityId::from(id),
            title: title.to_string(),
            completed: false,
            created_at: 1,
        }
    }

    #[test]
    fn absent_key_loads_as_empty_list() {
        let store = MemoryKvStore::new();
        let mut list: PersistedList<'_, Todo, _> = PersistedList::new(&store, "todos");
        assert_eq!(list.state(), ListState::Uninitialized);

        assert!(list.load().unwrap().is_empty());
        assert_eq!(list.state(), ListState::Loaded);
        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn corrupt_payload_loads_empty_and_blocks_writes_until_clear() {
        let store = MemoryKvStore::new();
        store.set("todos", "{not json").unwrap();

        let mut list: PersistedList<'_, Todo, _> = PersistedList::new(&store, "todos");
        assert!(list.load().unwrap().is_empty());
        assert!(list.is_corrupt());

        let err = list.prepend(todo("a", "new")).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("{not json"));

        list.clear().unwrap();
        list.prepend(todo("a", "new")).unwrap();
        assert_eq!(list.load().unwrap().len(), 1);
    }

    #[test]
    fn replace_before_load_keeps_unreadable_entries() {
        let store = MemoryKvStore::new();
        store.set("todos", r#"[{"id":"x","title":7}]"#).unwrap();

        let mut list = PersistedList::new(&store, "todos");
        list.replace(vec![todo("a", "fresh")]).unwrap();

        assert_eq!(list.unreadable_count(), 1);
        let json: serde_json::Value =
            serde_json::from_str(&store.get("todos").unwrap().unwrap()).unwrap();
        assert_eq!(json[0]["id"], "a");
        assert_eq!(json[1]["title"], 7);
    }

    #[test]
    fn clear_deletes_key_and_stays_loaded() {
        let store = MemoryKvStore::new();
        let mut list = PersistedList::new(&store, "todos");
        list.replace(vec![todo("a", "one")]).unwrap();

        list.clear().unwrap();
        assert_eq!(list.state(), ListState::Loaded);
        assert!(list.load().unwrap().is_empty());
        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn update_of_unknown_id_writes_nothing() {
        let store = MemoryKvStore::new();
        let mut list: PersistedList<'_, Todo, _> = PersistedList::new(&store, "todos");

        let updated = list
            .update_by_id(&EntityId::from("missing"), |item| Some(item.toggled()))
            .unwrap();
        assert_eq!(updated, None);
        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let store = MemoryKvStore::new();
        let mut list = PersistedList::new(&store, "todos");
        list.replace(vec![todo("a", "1"), todo("b", "2"), todo("c", "3")])
            .unwrap();

        assert_eq!(
            list.find(&EntityId::from("b")).unwrap().map(|t| t.title.as_str()),
            Some("2")
        );
        assert!(list.remove_by_id(&EntityId::from("b")).unwrap());
        assert!(list.find(&EntityId::from("b")).unwrap().is_none());
        assert!(!list.remove_by_id(&EntityId::from("b")).unwrap());

        let ids: Vec<&str> = list.load().unwrap().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
