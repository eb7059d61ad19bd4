//! Presentation-side selection state.
//!
//! The active board, list and card belong to the UI session, not to the
//! store. A `Selection` only holds ids and resolves them against the store on
//! demand, so a stale id simply resolves to nothing.

use crate::{
    domain::{Board, BoardId, Card, CardId, List, ListId},
    ids::IdGenerator,
    storage::Storage,
    store::BoardStore,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub board: Option<BoardId>,
    pub list: Option<ListId>,
    pub card: Option<CardId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a board and clears the list and card below it
    pub fn select_board(&mut self, board_id: BoardId) {
        self.board = Some(board_id);
        self.list = None;
        self.card = None;
    }

    /// Selects a list on the active board and clears the card
    pub fn select_list(&mut self, list_id: ListId) {
        self.list = Some(list_id);
        self.card = None;
    }

    pub fn select_card(&mut self, card_id: CardId) {
        self.card = Some(card_id);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active_board<'a, S: Storage, G: IdGenerator>(
        &self,
        store: &'a BoardStore<S, G>,
    ) -> Option<&'a Board> {
        store.get_board(self.board.as_ref()?)
    }

    pub fn active_list<'a, S: Storage, G: IdGenerator>(
        &self,
        store: &'a BoardStore<S, G>,
    ) -> Option<&'a List> {
        store.get_list(self.board.as_ref()?, self.list.as_ref()?)
    }

    pub fn active_card<'a, S: Storage, G: IdGenerator>(
        &self,
        store: &'a BoardStore<S, G>,
    ) -> Option<&'a Card> {
        store.get_card(
            self.board.as_ref()?,
            self.list.as_ref()?,
            self.card.as_ref()?,
        )
    }

    /// Drops ids that no longer resolve, along with everything below them
    pub fn prune<S: Storage, G: IdGenerator>(&mut self, store: &BoardStore<S, G>) {
        if self.active_board(store).is_none() {
            self.clear();
        } else if self.active_list(store).is_none() {
            self.list = None;
            self.card = None;
        } else if self.active_card(store).is_none() {
            self.card = None;
        }
    }
}
