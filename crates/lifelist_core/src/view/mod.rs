//! Derived views computed from the current lists.
//!
//! # Responsibility
//! - Turn a raw list plus the current filter selection (and, for events,
//!   the current instant) into what a screen displays.
//!
//! # Invariants
//! - Every function is pure and recomputes from scratch; nothing is cached.
//! - Inputs are never mutated; outputs borrow from the input slice.
//! - Empty input yields empty output.

pub mod event_view;
pub mod note_view;
pub mod task_view;
pub mod todo_view;
