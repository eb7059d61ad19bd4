use crate::domain::id::CardId;
use serde::{Deserialize, Serialize};

/// A card on a kanban list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Creates a new card with the given ID, title and description
    pub fn new(id: CardId, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
        }
    }

    /// Replaces title and description
    pub fn set_content(&mut self, title: String, description: String) {
        self.title = title;
        self.description = description;
    }

    /// Case-insensitive match against title or description.
    ///
    /// `query_lower` must already be lowercased.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}
