use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors surfaced by the store.
///
/// Unknown board, list or card ids are not errors: lookups yield `None` and
/// mutations do nothing. Every variant here comes from persistence or setup.
#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid id strategy '{0}'. Valid strategies: sequential, uuid, timestamp")]
    InvalidIdStrategy(String),
}

#[cfg(feature = "sqlite-storage")]
impl From<rusqlite::Error> for KanbanError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StorageError(err.to_string())
    }
}
