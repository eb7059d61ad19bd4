use crate::{
    config::StoreConfig,
    domain::Board,
    error::{KanbanError, Result},
    storage::{decode, encode, Storage},
};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::{path::Path, sync::Mutex};

/// SQLite-backed key-value storage.
///
/// The board document lives in a single row of the `kv` table, keyed by the
/// namespace.
pub struct SqliteStorage {
    connection: Mutex<Connection>,
    namespace: String,
    pretty: bool,
}

impl SqliteStorage {
    const DATABASE_FILE: &'static str = "kanboard.db";

    /// Opens (or creates) the database at `database_path`
    pub fn open(database_path: impl AsRef<Path>, namespace: impl Into<String>) -> Result<Self> {
        let connection = Connection::open(database_path)?;
        Self::with_connection(connection, namespace.into())
    }

    pub fn open_in_memory(namespace: impl Into<String>) -> Result<Self> {
        let connection = Connection::open_in_memory()?;
        Self::with_connection(connection, namespace.into())
    }

    /// Opens `kanboard.db` inside the configured data directory
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let mut storage = Self::open(
            config.data_dir.join(Self::DATABASE_FILE),
            config.namespace.clone(),
        )?;
        storage.pretty = config.pretty;
        Ok(storage)
    }

    fn with_connection(connection: Connection, namespace: String) -> Result<Self> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(Self {
            connection: Mutex::new(connection),
            namespace,
            pretty: false,
        })
    }

    fn connection(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| KanbanError::StorageError("sqlite connection lock poisoned".to_string()))
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn load(&self) -> Result<Option<Vec<Board>>> {
        let document: Option<String> = self
            .connection()?
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![self.namespace],
                |row| row.get(0),
            )
            .optional()?;

        document.as_deref().map(decode).transpose()
    }

    async fn save(&self, boards: &[Board]) -> Result<()> {
        let json = encode(boards, self.pretty)?;
        self.connection()?.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![self.namespace, json],
        )?;
        Ok(())
    }
}
