pub mod board;
pub mod card;
pub mod id;
pub mod list;
pub mod reorder;
pub mod store;

pub use board::{Board, BoardCollection, IconName};
pub use card::{parse_due, Card, CardDraft, CardPatch, Label, LabelColor};
pub use id::{BoardId, CardId, ListId};
pub use list::List;
pub use reorder::{Move, MoveOutcome};
pub use store::ListStore;
