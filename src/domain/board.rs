use crate::domain::card::require_title;
use crate::domain::id::BoardId;
use crate::domain::store::ListStore;
use crate::error::{Result, TaskflowError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic icon reference resolved to a glyph by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconName(String);

impl IconName {
    pub const DEFAULT: &'static str = "LayoutGrid";

    /// Icons offered when creating a board
    pub const BOARD_CHOICES: [&'static str; 7] = [
        "LayoutGrid",
        "Code",
        "Briefcase",
        "Brain",
        "CheckSquare",
        "Rocket",
        "Heart",
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_board_choice(&self) -> bool {
        Self::BOARD_CHOICES.contains(&self.0.as_str())
    }
}

impl Default for IconName {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named board owning its own lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub icon_name: IconName,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub lists: ListStore,
}

impl Board {
    /// Creates an empty board; the title must be non-blank
    pub fn new(title: &str, icon_name: Option<IconName>) -> Result<Self> {
        Ok(Self {
            id: BoardId::generate(),
            title: require_title(title, "Board")?,
            icon_name: icon_name.unwrap_or_default(),
            last_updated: Utc::now(),
            lists: ListStore::new(),
        })
    }

    /// Card count derived from the board's lists
    pub fn card_count(&self) -> usize {
        self.lists.total_cards()
    }

    /// Short relative age such as `5m ago`, `3h ago` or `2d ago`
    pub fn updated_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.last_updated);
        let minutes = elapsed.num_minutes().max(0);
        let hours = elapsed.num_hours().max(0);
        if minutes < 60 {
            format!("{}m ago", minutes)
        } else if hours < 24 {
            format!("{}h ago", hours)
        } else {
            format!("{}d ago", elapsed.num_days())
        }
    }
}

/// Boards in display order, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardCollection {
    boards: Vec<Board>,
}

impl BoardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn get(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    pub fn get_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| &b.id == id)
    }

    /// Validates and inserts a new board at the front
    pub fn create(&mut self, title: &str, icon_name: Option<IconName>) -> Result<BoardId> {
        let board = Board::new(title, icon_name)?;
        let id = board.id.clone();
        tracing::debug!(board_id = %id, title = %board.title, "board created");
        self.boards.insert(0, board);
        Ok(id)
    }

    /// Inserts an already-built board at the front
    pub fn push_front(&mut self, board: Board) {
        self.boards.insert(0, board);
    }

    pub fn require(&self, id: &BoardId) -> Result<&Board> {
        self.get(id)
            .ok_or_else(|| TaskflowError::BoardNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardDraft;
    use chrono::Duration;

    #[test]
    fn test_board_creation_defaults() {
        let board = Board::new(" Roadmap ", None).unwrap();
        assert_eq!(board.title, "Roadmap");
        assert_eq!(board.icon_name.as_str(), "LayoutGrid");
        assert_eq!(board.card_count(), 0);
    }

    #[test]
    fn test_board_requires_title() {
        let err = Board::new("   ", None).unwrap_err();
        assert_eq!(err.to_string(), "Board title is required");
    }

    #[test]
    fn test_card_count_is_derived() {
        let mut board = Board::new("Roadmap", Some(IconName::new("Rocket"))).unwrap();
        let list = board.lists.add_list("To Do").unwrap();
        board.lists.add_card(&list, CardDraft::new("a")).unwrap();
        board.lists.add_card(&list, CardDraft::new("b")).unwrap();
        assert_eq!(board.card_count(), 2);

        board.lists.delete_list(&list).unwrap();
        assert_eq!(board.card_count(), 0);
    }

    #[test]
    fn test_updated_label() {
        let mut board = Board::new("Roadmap", None).unwrap();
        let now = Utc::now();

        board.last_updated = now - Duration::minutes(5);
        assert_eq!(board.updated_label(now), "5m ago");

        board.last_updated = now - Duration::hours(3);
        assert_eq!(board.updated_label(now), "3h ago");

        board.last_updated = now - Duration::hours(72);
        assert_eq!(board.updated_label(now), "3d ago");
    }

    #[test]
    fn test_collection_inserts_newest_first() {
        let mut boards = BoardCollection::new();
        let first = boards.create("First", None).unwrap();
        let second = boards.create("Second", None).unwrap();

        assert_eq!(boards.boards()[0].id, second);
        assert_eq!(boards.boards()[1].id, first);
    }

    #[test]
    fn test_collection_rejects_blank_title() {
        let mut boards = BoardCollection::new();
        assert!(boards.create("", None).is_err());
        assert!(boards.is_empty());
    }

    #[test]
    fn test_icon_choices() {
        assert!(IconName::new("Brain").is_board_choice());
        assert!(!IconName::new("Skull").is_board_choice());
    }
}
