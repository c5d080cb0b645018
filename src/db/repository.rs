use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::sync::Mutex;

use super::error::StoreError;

/// Durable key/value storage behind the counter.
pub trait KvStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

// ─── SQLite ─────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>, StoreError> {
        let value = conn
            .query_row(
                "SELECT value FROM app_meta WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<(), StoreError> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

/// [`KvStore`] over the `app_meta` table. Expects migrations to have run.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        MetaRepo::get(&self.conn, key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        MetaRepo::set(&self.conn, key, value)
    }
}

// ─── In-memory ──────────────────────────────────────────────────────────────

/// Non-durable store for `--ephemeral` sessions and tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KvStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn sqlite_store(path: &std::path::Path) -> SqliteStore {
        let conn = Connection::open(path).unwrap();
        run_migrations(&conn).unwrap();
        SqliteStore::new(conn)
    }

    #[test]
    fn sqlite_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = sqlite_store(&dir.path().join("misbaha.db"));
        assert_eq!(store.read("tasbihCount").unwrap(), None);
    }

    #[test]
    fn sqlite_overwrites_and_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("misbaha.db");
        {
            let store = sqlite_store(&path);
            store.write("tasbihCount", "7").unwrap();
            store.write("tasbihCount", "8").unwrap();
        }
        let store = sqlite_store(&path);
        assert_eq!(store.read("tasbihCount").unwrap().as_deref(), Some("8"));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::with_entries([("theme", "dark")]);
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));
        store.write("theme", "light").unwrap();
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.read("rakatState").unwrap(), None);
    }

    #[test]
    fn boxed_store_delegates() {
        let store: Box<dyn KvStore> = Box::new(MemoryStore::new());
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }
}
