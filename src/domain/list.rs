use crate::domain::{card::Card, id::CardId, id::ListId};
use serde::{Deserialize, Serialize};

/// An ordered list of cards, owned by one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    /// Creates an empty list
    pub fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            cards: Vec::new(),
        }
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| &card.id == id)
    }

    /// Index of the card within this list
    pub fn position_of(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    /// Removes the card, shifting every following card left by one
    pub fn take_card(&mut self, id: &CardId) -> Option<(usize, Card)> {
        let index = self.position_of(id)?;
        Some((index, self.cards.remove(index)))
    }

    /// Inserts a card at `position`, or appends when `position` is past the end.
    ///
    /// Returns the index the card ended up at.
    pub fn insert_card_at(&mut self, card: Card, position: usize) -> usize {
        let index = position.min(self.cards.len());
        self.cards.insert(index, card);
        index
    }

    /// Card titles in order
    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.title.as_str()).collect()
    }
}
