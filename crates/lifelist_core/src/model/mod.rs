//! Domain records for the four list features.
//!
//! # Responsibility
//! - Define the persisted shape of todos, tasks, notes and events.
//! - Define editor drafts and the title rule shared by every editor.
//!
//! # Invariants
//! - Every record is identified by a stable `EntityId` that never changes
//!   after creation.
//! - Persisted field names are camelCase (`createdAt`, `reminderSet`, ...).
//! - Titles are stored trimmed and are never empty.

pub mod event;
pub mod id;
pub mod note;
pub mod task;
pub mod todo;
pub mod validation;

pub use id::EntityId;

/// Unix epoch milliseconds.
pub type EpochMillis = i64;

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> EpochMillis {
    chrono::Utc::now().timestamp_millis()
}

/// A list entry addressable by id.
pub trait Identified {
    fn id(&self) -> &EntityId;
}
