pub mod backup;
pub mod db;
pub mod error;
pub mod image;
pub mod kv;
pub mod migrate;
pub mod paths;
pub mod records;

use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

pub use image::ImageStore;
pub use kv::{KeyValueStore, MemoryKv, PEOPLE_LIST_KEY, PROFILE_PICTURE_KEY};
pub use records::RecordStore;

/// SQLite-backed key-value storage for the directory and profile picture.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)?;
        match self.conn.path() {
            Some(path) if !path.is_empty() => db::make_private(Path::new(path)),
            _ => Ok(()),
        }
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn backup_to(&self, path: &Path) -> Result<PathBuf> {
        backup::backup_to(&self.conn, path)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn records(&self) -> RecordStore<'_, Self> {
        RecordStore::load(self)
    }

    pub fn image(&self) -> ImageStore<'_, Self> {
        ImageStore::load(self)
    }
}

impl KeyValueStore for Store {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at;",
            params![key, value, now],
        )?;
        Ok(())
    }
}
