use crate::{domain::Board, error::Result};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteStorage;

/// Storage trait for persisting the board tree
///
/// The whole tree is written on every save; there is no incremental update.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the stored tree, or `None` when nothing has been stored yet
    async fn load(&self) -> Result<Option<Vec<Board>>>;

    /// Replaces the stored tree
    async fn save(&self, boards: &[Board]) -> Result<()>;
}

/// Serializes a board tree to its stored document form
pub fn encode(boards: &[Board], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(boards)?
    } else {
        serde_json::to_string(boards)?
    };
    Ok(json)
}

/// Parses a stored document back into a board tree
pub fn decode(document: &str) -> Result<Vec<Board>> {
    Ok(serde_json::from_str(document)?)
}
