//! Key-value store contract and implementations.
//!
//! # Responsibility
//! - Define the synchronous `get/set/delete` string store every list
//!   container persists through.
//! - Provide a SQLite-backed store for devices and an in-memory store for
//!   tests and previews.
//!
//! # Invariants
//! - Keys and values are opaque UTF-8 strings; the store never inspects
//!   payloads.
//! - `delete` of an absent key succeeds.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryKvStore;
pub use sqlite_store::SqliteKvStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while reading or writing a persisted list.
#[derive(Debug)]
pub enum StoreError {
    /// Backing database failure (open, migration or statement).
    Db(DbError),
    /// A list could not be serialized before writing.
    Encode {
        key: String,
        source: serde_json::Error,
    },
    /// The stored payload under `key` is not a list; writing would
    /// destroy it.
    Corrupt { key: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode { key, source } => {
                write!(f, "failed to encode list `{key}`: {source}")
            }
            Self::Corrupt { key } => {
                write!(f, "stored list `{key}` is unreadable; clear it before writing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode { source, .. } => Some(source),
            Self::Corrupt { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string store keyed by string, surviving restarts.
pub trait KeyValueStore {
    /// Returns the raw value at `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`. Absent keys are not an error.
    fn delete(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}
