//! # TaskFlow Core
//!
//! Domain model and reorder engine for the TaskFlow kanban board.
//!
//! This crate provides boards, lists and cards, the operations that mutate
//! them, and the interaction state a UI needs (open editors, drag gestures)
//! without any dependency on a specific rendering layer. Everything lives
//! in memory.

pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod sample;
pub mod workspace;

// Re-export commonly used types
pub use config::WorkspaceConfig;
pub use domain::{
    board::{Board, BoardCollection, IconName},
    card::{Card, CardDraft, CardPatch, Label, LabelColor},
    id::{BoardId, CardId, ListId},
    list::List,
    reorder::{Move, MoveOutcome},
    store::ListStore,
};
pub use error::{Result, TaskflowError};
pub use notify::{LogNotifier, Notification, Notifier, RecordingNotifier, Severity};
pub use workspace::{DropTarget, Workspace};
