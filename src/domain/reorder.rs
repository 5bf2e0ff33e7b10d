//! Relocation of lists and cards.
//!
//! All moves use remove-then-insert semantics: the item is taken out first,
//! which shifts later indices down by one, and the destination index is then
//! interpreted against the shortened sequence.

use crate::domain::id::{CardId, ListId};
use crate::domain::store::ListStore;
use crate::error::{Result, TaskflowError};
use serde::{Deserialize, Serialize};

/// Whether a move actually changed the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Unchanged,
}

/// A single relocation, independent of how the gesture was captured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum Move {
    List {
        from: usize,
        to: usize,
    },
    Card {
        source_list: ListId,
        dest_list: ListId,
        from: usize,
        to: usize,
    },
}

/// Moves `items[from]` so it ends up at `to`; both must be valid indices
fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<MoveOutcome> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(TaskflowError::IndexOutOfRange { index, len });
        }
    }
    if from == to {
        return Ok(MoveOutcome::Unchanged);
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(MoveOutcome::Moved)
}

impl ListStore {
    /// Moves the list at `from` to position `to`
    pub fn reorder_lists(&mut self, from: usize, to: usize) -> Result<MoveOutcome> {
        let outcome = relocate(&mut self.lists, from, to)?;
        if outcome == MoveOutcome::Moved {
            tracing::debug!(from, to, "list reordered");
        }
        Ok(outcome)
    }

    /// Moves the card at `from` in `source_list` to `to` in `dest_list`.
    ///
    /// Within one list this behaves like [`ListStore::reorder_lists`] and
    /// `to` must be a valid index. Across lists `to` is clamped to the
    /// destination's length.
    pub fn move_card(
        &mut self,
        source_list: &ListId,
        dest_list: &ListId,
        from: usize,
        to: usize,
    ) -> Result<MoveOutcome> {
        let src = self.require_position(source_list)?;
        let dst = self.require_position(dest_list)?;

        let src_len = self.lists[src].cards.len();
        if from >= src_len {
            return Err(TaskflowError::IndexOutOfRange {
                index: from,
                len: src_len,
            });
        }

        if src == dst {
            let outcome = relocate(&mut self.lists[src].cards, from, to)?;
            if outcome == MoveOutcome::Moved {
                tracing::debug!(list_id = %source_list, from, to, "card reordered");
            }
            return Ok(outcome);
        }

        let card = self.lists[src].cards.remove(from);
        let dest_cards = &mut self.lists[dst].cards;
        let to = to.min(dest_cards.len());
        tracing::debug!(
            card_id = %card.id,
            from_list = %source_list,
            to_list = %dest_list,
            to,
            "card moved"
        );
        dest_cards.insert(to, card);
        Ok(MoveOutcome::Moved)
    }

    /// Moves a card located by ID. With no index the card is appended, and
    /// dropping a card back onto its own list is a no-op.
    pub fn move_card_by_id(
        &mut self,
        card_id: &CardId,
        dest_list: &ListId,
        to: Option<usize>,
    ) -> Result<MoveOutcome> {
        let (src, from) = self
            .locate_card(card_id)
            .ok_or_else(|| TaskflowError::CardNotFound(card_id.to_string()))?;
        let dst = self.require_position(dest_list)?;

        let to = match to {
            Some(to) => to,
            None if src == dst => return Ok(MoveOutcome::Unchanged),
            None => self.lists[dst].cards.len(),
        };

        let source_list = self.lists[src].id.clone();
        self.move_card(&source_list, dest_list, from, to)
    }

    pub fn apply_move(&mut self, instruction: &Move) -> Result<MoveOutcome> {
        match instruction {
            Move::List { from, to } => self.reorder_lists(*from, *to),
            Move::Card {
                source_list,
                dest_list,
                from,
                to,
            } => self.move_card(source_list, dest_list, *from, *to),
        }
    }
}
