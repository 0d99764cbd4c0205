//! Event list use-cases.
//!
//! # Invariants
//! - New events are appended; display order comes from the timeline view.
//! - `color` is re-derived from `category` on every save.
//! - Editing keeps `id`, `reminder_set` and `created_at`.

use crate::model::event::{Event, EventDraft};
use crate::model::{now_epoch_ms, EntityId};
use crate::repo::list_repo::PersistedList;
use crate::service::editor::{rejected, EntityEditor, SaveOutcome};
use crate::service::{update_entry, EVENTS_KEY};
use crate::store::{KeyValueStore, StoreResult};
use crate::view::event_view::{event_timeline, reminder_count, EventTimeline};
use chrono::{Local, NaiveDate, NaiveDateTime};
use log::info;

pub struct EventService<'s, S: KeyValueStore + ?Sized> {
    list: PersistedList<'s, Event, S>,
}

impl<'s, S: KeyValueStore + ?Sized> EventService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            list: PersistedList::new(store, EVENTS_KEY),
        }
    }

    pub fn events(&mut self) -> StoreResult<&[Event]> {
        self.list.load()
    }

    /// Upcoming/past split around `now`.
    pub fn timeline(&mut self, now: NaiveDateTime) -> StoreResult<EventTimeline<'_>> {
        Ok(event_timeline(self.list.load()?, now))
    }

    /// Upcoming/past split around the current local time.
    pub fn timeline_now(&mut self) -> StoreResult<EventTimeline<'_>> {
        self.timeline(Local::now().naive_local())
    }

    /// Blank draft for a new event on today's local date.
    pub fn new_draft(&self) -> EventDraft {
        EventDraft::for_day(today())
    }

    pub fn toggle_reminder(&mut self, id: &EntityId) -> StoreResult<Option<Event>> {
        self.list
            .update_by_id(id, |event| Some(event.with_reminder_toggled()))
    }

    pub fn reminder_count(&mut self) -> StoreResult<usize> {
        Ok(reminder_count(self.list.load()?))
    }

    /// Entry to pre-fill the editor with.
    pub fn get(&mut self, id: &EntityId) -> StoreResult<Option<&Event>> {
        self.list.find(id)
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.list.clear()
    }
}

impl<S: KeyValueStore + ?Sized> EntityEditor for EventService<'_, S> {
    type Draft = EventDraft;
    type Entity = Event;

    fn create(&mut self, draft: EventDraft) -> StoreResult<SaveOutcome<Event>> {
        let event = match Event::from_draft(draft, now_epoch_ms()) {
            Ok(event) => event,
            Err(reason) => return Ok(rejected(EVENTS_KEY, reason)),
        };
        self.list.append(event.clone())?;
        info!(
            "event=event_create module=service status=ok id={} category={}",
            event.id,
            event.category.label()
        );
        Ok(SaveOutcome::Created(event))
    }

    fn update(&mut self, id: &EntityId, draft: EventDraft) -> StoreResult<SaveOutcome<Event>> {
        if let Err(reason) = draft.validate() {
            return Ok(rejected(EVENTS_KEY, reason));
        }
        update_entry(&mut self.list, id, |event| event.with_draft(draft))
    }

    fn delete(&mut self, id: &EntityId) -> StoreResult<bool> {
        self.list.remove_by_id(id)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
