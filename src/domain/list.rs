use crate::domain::card::{require_title, Card};
use crate::domain::id::{CardId, ListId};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An ordered, named column of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub const DEFAULT_TITLE: &'static str = "New List";

    /// Creates an empty list with a generated ID
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(ListId::generate(), title)
    }

    pub fn with_id(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Renames the list; a blank title leaves it untouched
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = require_title(title, "List")?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| &card.id == id)
    }

    pub fn position_of(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }
}
