use crate::{
    domain::Board,
    error::{KanbanError, Result},
    storage::{decode, encode, Storage},
};
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// In-process storage holding the serialized document
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: Mutex<Option<String>>,
    saves: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an already stored document
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
            saves: AtomicUsize::new(0),
        }
    }

    /// The stored document, if any
    pub fn document(&self) -> Option<String> {
        self.document
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load(&self) -> Result<Option<Vec<Board>>> {
        self.document().as_deref().map(decode).transpose()
    }

    async fn save(&self, boards: &[Board]) -> Result<()> {
        let json = encode(boards, false)?;
        let mut slot = self
            .document
            .lock()
            .map_err(|_| KanbanError::StorageError("memory storage lock poisoned".to_string()))?;
        *slot = Some(json);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
