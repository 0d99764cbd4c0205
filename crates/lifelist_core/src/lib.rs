//! Core of the LifeList productivity app.
//!
//! Todos, prioritized tasks, notes and events each live in one list that is
//! mirrored wholesale into a key-value store. Screens read derived views
//! computed from those lists and report user actions back to the services.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;
pub mod workspace;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventCategory, EventDraft, EventTime};
pub use model::note::{Note, NoteColor, NoteDraft, NoteSwatch};
pub use model::task::{Priority, Task, TaskDraft};
pub use model::todo::Todo;
pub use model::validation::ValidationError;
pub use model::{EntityId, EpochMillis, Identified};
pub use repo::list_repo::{ListState, PersistedList};
pub use service::editor::{EditorEffect, EditorOutcome, EntityEditor, SaveOutcome};
pub use service::event_service::EventService;
pub use service::note_service::NoteService;
pub use service::task_service::TaskService;
pub use service::todo_service::TodoService;
pub use service::{EVENTS_KEY, NOTES_KEY, TASKS_KEY, TODOS_KEY};
pub use store::{KeyValueStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};
pub use view::event_view::{event_timeline, DayLabel, EventTimeline};
pub use view::note_view::{note_columns, NoteColumns};
pub use view::task_view::{task_display, PriorityFilter, StatusFilter, TaskFilter};
pub use workspace::{LifeList, ListSummary};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
