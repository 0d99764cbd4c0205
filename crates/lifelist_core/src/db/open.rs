//! Connection bootstrap for the backing store.
//!
//! # Invariants
//! - Returned connections have the `kv_entries` schema fully applied.
//! - Every open attempt emits one `store_open` start event and one
//!   terminal ok/error event with duration.

use super::migrations::apply_migrations;
use super::{DbError, DbResult, StoreLocation};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) a store database file and applies pending migrations.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_at(StoreLocation::File(path.to_path_buf()), || Connection::open(path))
}

/// Opens a throwaway in-memory store database.
///
/// Used by tests and previews; nothing survives the connection.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_at(StoreLocation::Memory, Connection::open_in_memory)
}

fn open_at(
    location: StoreLocation,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!(
        "event=store_open module=db status=start mode={}",
        location.mode()
    );

    let result = connect()
        .map_err(|source| DbError::Open {
            location: location.clone(),
            source,
        })
        .and_then(|mut conn| {
            conn.busy_timeout(BUSY_TIMEOUT)
                .map_err(|source| DbError::Schema {
                    location: location.clone(),
                    source,
                })?;
            let applied = apply_migrations(&mut conn, &location)?;
            Ok((conn, applied))
        });

    match result {
        Ok((conn, applied)) => {
            info!(
                "event=store_open module=db status=ok mode={} migrations_applied={} duration_ms={}",
                location.mode(),
                applied,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode={} duration_ms={} error_code={} error={}",
                location.mode(),
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Err(err)
        }
    }
}
