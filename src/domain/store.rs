use crate::domain::card::{Card, CardDraft, CardPatch};
use crate::domain::id::{CardId, ListId};
use crate::domain::list::List;
use crate::error::{Result, TaskflowError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered lists of ordered cards.
///
/// Every mutating operation validates its arguments before touching any
/// list, so an `Err` always leaves the store exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<List>", into = "Vec<List>")]
pub struct ListStore {
    pub(crate) lists: Vec<List>,
}

impl TryFrom<Vec<List>> for ListStore {
    type Error = TaskflowError;

    fn try_from(lists: Vec<List>) -> Result<Self> {
        Self::from_lists(lists)
    }
}

impl From<ListStore> for Vec<List> {
    fn from(store: ListStore) -> Self {
        store.lists
    }
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing lists, rejecting repeated card IDs
    pub fn from_lists(lists: Vec<List>) -> Result<Self> {
        let mut seen = HashSet::new();
        for card in lists.iter().flat_map(|list| list.cards.iter()) {
            if !seen.insert(card.id.clone()) {
                return Err(TaskflowError::DuplicateCard(card.id.to_string()));
            }
        }
        Ok(Self { lists })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let lists: Vec<List> = serde_json::from_str(json)?;
        Self::from_lists(lists)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Number of cards across all lists
    pub fn total_cards(&self) -> usize {
        self.lists.iter().map(List::len).sum()
    }

    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|list| &list.id == id)
    }

    pub fn position_of(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|list| &list.id == id)
    }

    pub(crate) fn require_position(&self, id: &ListId) -> Result<usize> {
        self.position_of(id)
            .ok_or_else(|| TaskflowError::ListNotFound(id.to_string()))
    }

    fn require_list_mut(&mut self, id: &ListId) -> Result<&mut List> {
        let index = self.require_position(id)?;
        Ok(&mut self.lists[index])
    }

    /// Finds a card anywhere in the store together with its list
    pub fn find_card(&self, id: &CardId) -> Option<(&List, &Card)> {
        self.lists
            .iter()
            .find_map(|list| list.card(id).map(|card| (list, card)))
    }

    /// Returns `(list index, card index)` for a card
    pub fn locate_card(&self, id: &CardId) -> Option<(usize, usize)> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(li, list)| list.position_of(id).map(|ci| (li, ci)))
    }

    /// Appends an empty list and returns its ID
    pub fn add_list(&mut self, title: &str) -> Result<ListId> {
        let mut list = List::new(List::DEFAULT_TITLE);
        list.set_title(title)?;
        let id = list.id.clone();
        self.lists.push(list);
        tracing::debug!(list_id = %id, "list added");
        Ok(id)
    }

    pub fn edit_list_title(&mut self, list_id: &ListId, title: &str) -> Result<()> {
        self.require_list_mut(list_id)?.set_title(title)?;
        tracing::debug!(%list_id, "list title updated");
        Ok(())
    }

    /// Removes a list together with all of its cards
    pub fn delete_list(&mut self, list_id: &ListId) -> Result<List> {
        let index = self.require_position(list_id)?;
        let removed = self.lists.remove(index);
        tracing::debug!(%list_id, cards = removed.len(), "list deleted");
        Ok(removed)
    }

    /// Appends a new card built from the draft to the given list
    pub fn add_card(&mut self, list_id: &ListId, draft: CardDraft) -> Result<CardId> {
        let index = self.require_position(list_id)?;
        let card = Card::from_draft(CardId::generate(), draft)?;
        let id = card.id.clone();
        self.lists[index].cards.push(card);
        tracing::debug!(%list_id, card_id = %id, "card added");
        Ok(id)
    }

    /// Merges the patch into the card identified by `(list_id, card_id)`
    pub fn edit_card(&mut self, list_id: &ListId, card_id: &CardId, patch: CardPatch) -> Result<()> {
        patch.validate()?;
        self.require_list_mut(list_id)?
            .card_mut(card_id)
            .ok_or_else(|| TaskflowError::CardNotFound(card_id.to_string()))?
            .apply(patch)?;
        tracing::debug!(%list_id, %card_id, "card updated");
        Ok(())
    }

    pub fn delete_card(&mut self, list_id: &ListId, card_id: &CardId) -> Result<Card> {
        let list = self.require_list_mut(list_id)?;
        let index = list
            .position_of(card_id)
            .ok_or_else(|| TaskflowError::CardNotFound(card_id.to_string()))?;
        let removed = list.cards.remove(index);
        tracing::debug!(%list_id, %card_id, "card deleted");
        Ok(removed)
    }
}
