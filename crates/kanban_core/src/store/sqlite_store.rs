//! SQLite-backed snapshot store.
//!
//! # Responsibility
//! - Persist the serialized board collection as one row in the `snapshots`
//!   key-value table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Exactly one row per key; saves upsert in place.
//! - The stored document is the JSON array of boards, verbatim.

use crate::model::board::Board;
use crate::store::{SnapshotStore, StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Storage key for the board collection. Part of the on-disk format; do
/// not change without a migration.
const SNAPSHOT_KEY: &str = "kanban_boards";

/// Snapshot store over a migrated SQLite connection.
///
/// Open connections with [`crate::db::open_db`] or
/// [`crate::db::open_db_in_memory`] so migrations run first.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn load(&self) -> StoreResult<Vec<Board>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1;",
                [SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|err| StoreError::InvalidData(err.to_string())),
        }
    }

    fn save(&self, boards: &[Board]) -> StoreResult<()> {
        let raw = serde_json::to_string(boards).map_err(StoreError::Serialize)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![SNAPSHOT_KEY, raw],
        )?;
        Ok(())
    }
}
