//! # Kanboard Core
//!
//! Data model and persistence for kanban boards: boards own ordered lists,
//! lists own ordered cards, and cards can be moved between lists.
//!
//! The [`BoardStore`] owns the board tree and mirrors it to a [`Storage`]
//! backend after every mutation. Rendering and gesture handling live in the
//! presentation layer; [`Selection`] and [`domain::placement`] are the pieces
//! of that layer worth sharing.

pub mod config;
pub mod domain;
pub mod error;
pub mod ids;
pub mod session;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use domain::{Board, BoardId, Card, CardId, List, ListId};
pub use error::{KanbanError, Result};
pub use ids::{
    IdGenerator, IdStrategy, SequentialIdGenerator, TimestampIdGenerator, UuidIdGenerator,
};
pub use session::Selection;
pub use storage::{MemoryStorage, Storage};
pub use store::{BoardStore, CardLocation, MoveOutcome};

#[cfg(feature = "file-storage")]
pub use storage::FileStorage;
