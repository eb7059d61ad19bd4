//! The board store: sole owner of the board tree.
//!
//! Every mutation runs against the in-memory tree and then writes the whole
//! tree through the [`Storage`] collaborator before returning. Unknown ids are
//! never errors: lookups yield `None` and mutations leave the tree (and the
//! stored document) untouched.

use crate::{
    domain::{Board, BoardId, Card, CardId, List, ListId},
    error::Result,
    ids::IdGenerator,
    storage::{encode, Storage},
};
use tracing::{debug, info, warn};

/// Where a card currently lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLocation {
    pub board_id: BoardId,
    pub list_id: ListId,
    pub index: usize,
}

/// Result of [`BoardStore::move_card`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card now sits at `index` in the target list
    Moved { index: usize },
    /// The source list or the card within it does not exist
    CardNotFound,
    /// The target list does not exist; the card stayed where it was
    TargetNotFound,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// In-memory board tree mirrored to a storage backend
pub struct BoardStore<S: Storage, G: IdGenerator> {
    boards: Vec<Board>,
    storage: S,
    ids: G,
}

impl<S: Storage, G: IdGenerator> BoardStore<S, G> {
    /// Opens the store, loading the stored tree once.
    ///
    /// An absent document is the empty board collection.
    pub async fn open(storage: S, ids: G) -> Result<Self> {
        let boards = match storage.load().await? {
            Some(boards) => {
                info!(boards = boards.len(), "loaded board tree");
                boards
            }
            None => {
                info!("no stored board tree, starting empty");
                Vec::new()
            }
        };

        Ok(Self {
            boards,
            storage,
            ids,
        })
    }

    /// All boards in creation order
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The tree in its stored document form
    pub fn to_document(&self) -> Result<String> {
        encode(&self.boards, false)
    }

    async fn persist(&self) -> Result<()> {
        self.storage.save(&self.boards).await
    }

    // Boards

    pub async fn create_board(&mut self, name: impl Into<String>) -> Result<Board> {
        let board = Board::new(BoardId::from(self.ids.next_id()), name.into());
        debug!(board_id = %board.id, "created board");

        self.boards.push(board.clone());
        self.persist().await?;
        Ok(board)
    }

    pub fn get_board(&self, board_id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| &board.id == board_id)
    }

    /// Renames a board. Returns `false` if it does not exist.
    pub async fn update_board(
        &mut self,
        board_id: &BoardId,
        name: impl Into<String>,
    ) -> Result<bool> {
        let Some(board) = find_board_mut(&mut self.boards, board_id) else {
            debug!(%board_id, "update_board: board not found");
            return Ok(false);
        };

        board.name = name.into();
        debug!(%board_id, "renamed board");
        self.persist().await?;
        Ok(true)
    }

    /// Deletes a board with all of its lists and cards
    pub async fn delete_board(&mut self, board_id: &BoardId) -> Result<bool> {
        let Some(index) = self.boards.iter().position(|board| &board.id == board_id) else {
            debug!(%board_id, "delete_board: board not found");
            return Ok(false);
        };

        let removed = self.boards.remove(index);
        debug!(
            %board_id,
            lists = removed.lists.len(),
            cards = removed.card_count(),
            "deleted board"
        );
        self.persist().await?;
        Ok(true)
    }

    // Lists

    /// Appends a new list to a board.
    ///
    /// Returns `None` without touching anything when the board does not exist.
    pub async fn create_list(
        &mut self,
        board_id: &BoardId,
        name: impl Into<String>,
    ) -> Result<Option<List>> {
        let Some(board) = find_board_mut(&mut self.boards, board_id) else {
            debug!(%board_id, "create_list: board not found");
            return Ok(None);
        };

        let list = List::new(ListId::from(self.ids.next_id()), name.into());
        board.lists.push(list.clone());
        debug!(%board_id, list_id = %list.id, "created list");

        self.persist().await?;
        Ok(Some(list))
    }

    pub fn get_list(&self, board_id: &BoardId, list_id: &ListId) -> Option<&List> {
        self.get_board(board_id)?.list(list_id)
    }

    pub async fn update_list(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        name: impl Into<String>,
    ) -> Result<bool> {
        let Some(list) = find_list_mut(&mut self.boards, board_id, list_id) else {
            debug!(%board_id, %list_id, "update_list: list not found");
            return Ok(false);
        };

        list.name = name.into();
        debug!(%board_id, %list_id, "renamed list");
        self.persist().await?;
        Ok(true)
    }

    /// Deletes a list with all of its cards
    pub async fn delete_list(&mut self, board_id: &BoardId, list_id: &ListId) -> Result<bool> {
        let removed = find_board_mut(&mut self.boards, board_id)
            .and_then(|board| board.remove_list(list_id));

        let Some(removed) = removed else {
            debug!(%board_id, %list_id, "delete_list: list not found");
            return Ok(false);
        };

        debug!(%board_id, %list_id, cards = removed.cards.len(), "deleted list");
        self.persist().await?;
        Ok(true)
    }

    // Cards

    /// Appends a new card to a list.
    ///
    /// Returns `None` without touching anything when the list does not exist.
    pub async fn create_card(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Option<Card>> {
        let Some(list) = find_list_mut(&mut self.boards, board_id, list_id) else {
            debug!(%board_id, %list_id, "create_card: list not found");
            return Ok(None);
        };

        let card = Card::new(
            CardId::from(self.ids.next_id()),
            title.into(),
            description.into(),
        );
        list.cards.push(card.clone());
        debug!(%board_id, %list_id, card_id = %card.id, "created card");

        self.persist().await?;
        Ok(Some(card))
    }

    pub fn get_card(
        &self,
        board_id: &BoardId,
        list_id: &ListId,
        card_id: &CardId,
    ) -> Option<&Card> {
        self.get_list(board_id, list_id)?.card(card_id)
    }

    /// Replaces a card's title and description
    pub async fn update_card(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        card_id: &CardId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<bool> {
        let card = find_list_mut(&mut self.boards, board_id, list_id)
            .and_then(|list| list.card_mut(card_id));

        let Some(card) = card else {
            debug!(%board_id, %list_id, %card_id, "update_card: card not found");
            return Ok(false);
        };

        card.set_content(title.into(), description.into());
        debug!(%board_id, %list_id, %card_id, "updated card");
        self.persist().await?;
        Ok(true)
    }

    pub async fn delete_card(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        card_id: &CardId,
    ) -> Result<bool> {
        let removed = find_list_mut(&mut self.boards, board_id, list_id)
            .and_then(|list| list.take_card(card_id));

        if removed.is_none() {
            debug!(%board_id, %list_id, %card_id, "delete_card: card not found");
            return Ok(false);
        }

        debug!(%board_id, %list_id, %card_id, "deleted card");
        self.persist().await?;
        Ok(true)
    }

    /// Moves a card to `target_position` in the target list.
    ///
    /// The target may be the source list itself, or a list on another board.
    /// Positions past the end of the target (measured after the card has left
    /// its source) append. If the target list does not exist the card is left
    /// at its original index and nothing is persisted.
    pub async fn move_card(
        &mut self,
        source_board_id: &BoardId,
        source_list_id: &ListId,
        card_id: &CardId,
        target_board_id: &BoardId,
        target_list_id: &ListId,
        target_position: usize,
    ) -> Result<MoveOutcome> {
        let source = list_index(&self.boards, source_board_id, source_list_id);
        let origin = source.and_then(|(board, list)| {
            self.boards[board].lists[list].position_of(card_id)
        });

        let (Some((source_board, source_list)), Some(origin)) = (source, origin) else {
            debug!(
                %source_board_id,
                %source_list_id,
                %card_id,
                "move_card: card not found in source list"
            );
            return Ok(MoveOutcome::CardNotFound);
        };

        let Some((target_board, target_list)) =
            list_index(&self.boards, target_board_id, target_list_id)
        else {
            warn!(
                %card_id,
                %target_board_id,
                %target_list_id,
                "move_card: target list not found, card kept in source"
            );
            return Ok(MoveOutcome::TargetNotFound);
        };

        let card = self.boards[source_board].lists[source_list]
            .cards
            .remove(origin);
        let index =
            self.boards[target_board].lists[target_list].insert_card_at(card, target_position);

        debug!(
            %card_id,
            from = %source_list_id,
            to = %target_list_id,
            origin,
            index,
            "moved card"
        );
        self.persist().await?;
        Ok(MoveOutcome::Moved { index })
    }

    // Queries

    /// Finds the board, list and index holding a card
    pub fn locate_card(&self, card_id: &CardId) -> Option<CardLocation> {
        self.boards.iter().find_map(|board| {
            board.lists.iter().find_map(|list| {
                list.position_of(card_id).map(|index| CardLocation {
                    board_id: board.id.clone(),
                    list_id: list.id.clone(),
                    index,
                })
            })
        })
    }

    /// Cards whose title or description contains `query`, case-insensitive,
    /// in board, list and card order
    pub fn search_cards(&self, query: &str) -> Vec<(CardLocation, &Card)> {
        let query_lower = query.to_lowercase();
        let mut matches = Vec::new();

        for board in &self.boards {
            for list in &board.lists {
                for (index, card) in list.cards.iter().enumerate() {
                    if card.matches(&query_lower) {
                        let location = CardLocation {
                            board_id: board.id.clone(),
                            list_id: list.id.clone(),
                            index,
                        };
                        matches.push((location, card));
                    }
                }
            }
        }

        matches
    }
}

fn find_board_mut<'a>(boards: &'a mut [Board], board_id: &BoardId) -> Option<&'a mut Board> {
    boards.iter_mut().find(|board| &board.id == board_id)
}

fn find_list_mut<'a>(
    boards: &'a mut [Board],
    board_id: &BoardId,
    list_id: &ListId,
) -> Option<&'a mut List> {
    find_board_mut(boards, board_id)?.list_mut(list_id)
}

/// (board index, list index) of a list in the tree
fn list_index(boards: &[Board], board_id: &BoardId, list_id: &ListId) -> Option<(usize, usize)> {
    let board = boards.iter().position(|board| &board.id == board_id)?;
    let list = boards[board]
        .lists
        .iter()
        .position(|list| &list.id == list_id)?;
    Some((board, list))
}
