//! SQLite-backed durable state store.
//!
//! # Responsibility
//! - Implement the key/value storage port over the `kv_state` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The wrapped connection has migrations fully applied before use.

use super::{StateStore, StoreResult};
use crate::db::{open_db, open_db_in_memory};
use rusqlite::{params, Connection};
use std::path::Path;

/// Key/value store persisted in a local SQLite database.
///
/// This is the durable medium standing in for the host environment's
/// local storage.
pub struct SqliteStateStore {
    conn: Connection,
}

impl SqliteStateStore {
    /// Opens (or creates) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens an in-memory store; contents vanish when dropped.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already-bootstrapped connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl StateStore for SqliteStateStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_state WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_state WHERE key = ?1;", [key])?;
        Ok(())
    }
}
