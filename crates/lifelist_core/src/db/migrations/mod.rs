//! Schema steps for the `kv_entries` table.
//!
//! # Invariants
//! - Step versions start at 1 and increase by one.
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - Steps only shape the `kv_entries` table; list payloads are opaque JSON
//!   and are never rewritten here.

use crate::db::{DbError, DbResult, StoreLocation};
use rusqlite::{Connection, Transaction};

/// `(version, sql)` pairs in apply order.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_kv_entries.sql"))];

/// Returns the latest schema version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |(version, _)| *version)
}

/// Brings the store at `location` up to `latest_version()`.
///
/// Returns the number of steps applied. All pending steps run in one
/// transaction.
pub fn apply_migrations(conn: &mut Connection, location: &StoreLocation) -> DbResult<usize> {
    let schema_error = |source| DbError::Schema {
        location: location.clone(),
        source,
    };
    let current = schema_version(conn).map_err(schema_error)?;
    let latest = latest_version();

    if current > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            location: location.clone(),
            db_version: current,
            latest_supported: latest,
        });
    }

    let pending: Vec<_> = SCHEMA_STEPS
        .iter()
        .filter(|(version, _)| *version > current)
        .collect();
    if !pending.is_empty() {
        let tx = conn.transaction().map_err(schema_error)?;
        for (version, sql) in &pending {
            run_step(&tx, *version, sql).map_err(schema_error)?;
        }
        tx.commit().map_err(schema_error)?;
    }

    if !has_kv_table(conn).map_err(schema_error)? {
        return Err(DbError::MissingTable {
            location: location.clone(),
        });
    }
    Ok(pending.len())
}

/// Reads the schema version recorded in `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
}

fn run_step(tx: &Transaction<'_>, version: u32, sql: &str) -> rusqlite::Result<()> {
    tx.execute_batch(sql)?;
    tx.pragma_update(None, "user_version", version)
}

fn has_kv_table(conn: &Connection) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries');",
        [],
        |row| row.get::<_, bool>(0),
    )
}
