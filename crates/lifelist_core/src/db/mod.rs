//! SQLite bootstrap for the key-value backing store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for list persistence.
//! - Apply the `kv_entries` schema before any list is read or written.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A database written by a newer binary is refused, never downgraded.
//! - Open and schema errors name the store they came from.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Where a store database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    Memory,
}

impl StoreLocation {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Memory => None,
        }
    }

    fn mode(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory => "memory",
        }
    }
}

impl Display for StoreLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str(":memory:"),
        }
    }
}

#[derive(Debug)]
pub enum DbError {
    /// The database file could not be opened or created.
    Open {
        location: StoreLocation,
        source: rusqlite::Error,
    },
    /// The `kv_entries` schema could not be applied.
    Schema {
        location: StoreLocation,
        source: rusqlite::Error,
    },
    /// The file reports a schema version but has no `kv_entries` table.
    MissingTable { location: StoreLocation },
    UnsupportedSchemaVersion {
        location: StoreLocation,
        db_version: u32,
        latest_supported: u32,
    },
    /// A read or write on an already opened store failed.
    Sqlite(rusqlite::Error),
}

impl DbError {
    /// Store the error refers to, if it happened while opening.
    pub fn location(&self) -> Option<&StoreLocation> {
        match self {
            Self::Open { location, .. }
            | Self::Schema { location, .. }
            | Self::MissingTable { location }
            | Self::UnsupportedSchemaVersion { location, .. } => Some(location),
            Self::Sqlite(_) => None,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open_failed",
            Self::Schema { .. } => "schema_failed",
            Self::MissingTable { .. } => "missing_table",
            Self::UnsupportedSchemaVersion { .. } => "schema_too_new",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { location, source } => {
                write!(f, "cannot open list store `{location}`: {source}")
            }
            Self::Schema { location, source } => {
                write!(f, "cannot prepare list store `{location}`: {source}")
            }
            Self::MissingTable { location } => write!(
                f,
                "list store `{location}` has a schema version but no kv_entries table"
            ),
            Self::UnsupportedSchemaVersion {
                location,
                db_version,
                latest_supported,
            } => write!(
                f,
                "list store `{location}` has schema version {db_version}, newer than supported {latest_supported}"
            ),
            Self::Sqlite(err) => write!(f, "list store query failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Schema { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::MissingTable { .. } | Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
