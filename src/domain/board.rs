use crate::domain::{id::BoardId, id::ListId, list::List};
use serde::{Deserialize, Serialize};

/// Kanban board: a named, ordered sequence of lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    pub fn new(id: BoardId, name: String) -> Self {
        Self {
            id,
            name,
            lists: Vec::new(),
        }
    }

    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|list| &list.id == id)
    }

    pub fn list_mut(&mut self, id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| &list.id == id)
    }

    /// Removes a list together with its cards
    pub fn remove_list(&mut self, id: &ListId) -> Option<List> {
        let index = self.lists.iter().position(|list| &list.id == id)?;
        Some(self.lists.remove(index))
    }

    /// Total number of cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }
}
