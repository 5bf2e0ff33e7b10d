//! The surface a presentation layer drives.
//!
//! A [`Workspace`] owns the boards, the open editors and the current drag,
//! and reports the outcome of each operation to its [`Notifier`]. Failed
//! operations leave the state untouched, emit an error notification and
//! return the error so callers can branch on it.

pub mod drag;
pub mod editor;

use crate::config::WorkspaceConfig;
use crate::domain::{
    Board, BoardCollection, BoardId, CardDraft, CardId, CardPatch, IconName, Label, ListId,
    ListStore, Move, MoveOutcome,
};
use crate::error::{Result, TaskflowError};
use crate::notify::{Notifier, Severity};
use crate::sample;
use chrono::Utc;

pub use drag::{DragSession, DragSubject, DropTarget};
pub use editor::{CardForm, EditorState, ListTitleEditor};

pub struct Workspace<N: Notifier> {
    config: WorkspaceConfig,
    boards: BoardCollection,
    active: Option<BoardId>,
    editors: EditorState,
    drag: Option<DragSession>,
    notifier: N,
}

fn user_message(err: &TaskflowError) -> String {
    match err {
        TaskflowError::EmptyTitle { entity: "Board" } => "Board title cannot be empty".to_string(),
        other => other.to_string(),
    }
}

impl<N: Notifier> Workspace<N> {
    /// Builds a workspace, seeding sample boards when configured to.
    /// The newest board is opened.
    pub fn new(config: WorkspaceConfig, notifier: N) -> Result<Self> {
        config.validate()?;

        let mut boards = BoardCollection::new();
        if config.seed_sample_data {
            for board in sample::sample_boards(Utc::now())?.into_iter().rev() {
                boards.push_front(board);
            }
        }
        let active = boards.boards().first().map(|b| b.id.clone());

        Ok(Self {
            config,
            boards,
            active,
            editors: EditorState::default(),
            drag: None,
            notifier,
        })
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn boards(&self) -> &BoardCollection {
        &self.boards
    }

    pub fn editors(&self) -> &EditorState {
        &self.editors
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn active_board(&self) -> Option<&Board> {
        self.active.as_ref().and_then(|id| self.boards.get(id))
    }

    /// Lists of the open board
    pub fn store(&self) -> Option<&ListStore> {
        self.active_board().map(|b| &b.lists)
    }

    fn store_mut(&mut self) -> Result<&mut ListStore> {
        let id = self
            .active
            .as_ref()
            .ok_or_else(|| TaskflowError::BoardNotFound("no board is open".to_string()))?;
        self.boards
            .get_mut(id)
            .map(|b| &mut b.lists)
            .ok_or_else(|| TaskflowError::BoardNotFound(id.to_string()))
    }

    fn succeed(&mut self, severity: Severity, message: &str) {
        self.notifier.notify(severity, message);
    }

    fn fail<T>(&mut self, err: TaskflowError) -> Result<T> {
        tracing::warn!(error = %err, "operation rejected");
        self.notifier.notify(Severity::Error, &user_message(&err));
        Err(err)
    }

    fn report<T>(&mut self, result: Result<T>, message: &str) -> Result<T> {
        match result {
            Ok(value) => {
                self.succeed(Severity::Success, message);
                Ok(value)
            }
            Err(err) => self.fail(err),
        }
    }

    // Boards

    /// Creates a board at the front of the collection. It is opened if no
    /// other board is.
    pub fn create_board(&mut self, title: &str, icon_name: Option<IconName>) -> Result<BoardId> {
        let icon = icon_name.unwrap_or_else(|| self.config.default_board_icon.clone());
        match self.boards.create(title, Some(icon)) {
            Ok(id) => {
                if self.active_board().is_none() {
                    self.active = Some(id.clone());
                }
                let message = format!("Board \"{}\" created successfully", title.trim());
                self.succeed(Severity::Success, &message);
                Ok(id)
            }
            Err(err) => self.fail(err),
        }
    }

    /// Switches to another board, discarding open editors and any drag
    pub fn open_board(&mut self, id: &BoardId) -> Result<()> {
        let title = match self.boards.require(id) {
            Ok(board) => board.title.clone(),
            Err(err) => return self.fail(err),
        };
        self.active = Some(id.clone());
        self.editors.close_all();
        self.drag = None;
        self.succeed(Severity::Info, &format!("Opening \"{}\" board", title));
        Ok(())
    }

    // Lists

    /// Appends a list with the default title and opens its title editor
    pub fn add_list(&mut self) -> Result<ListId> {
        let title = self.config.default_list_title.clone();
        let result = self.store_mut().and_then(|store| store.add_list(&title));
        match result {
            Ok(id) => {
                self.editors.open_list_title(id.clone(), &title);
                Ok(id)
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn start_editing_list(&mut self, list_id: &ListId) -> Result<()> {
        let current = self
            .store()
            .and_then(|store| store.list(list_id))
            .map(|list| list.title.clone());
        match current {
            Some(title) => {
                self.editors.open_list_title(list_id.clone(), &title);
                Ok(())
            }
            None => self.fail(TaskflowError::ListNotFound(list_id.to_string())),
        }
    }

    /// Updates the text in the open list title editor
    pub fn set_list_title_input(&mut self, input: &str) {
        if let Some(editor) = self.editors.list_title_mut() {
            editor.input = input.to_string();
        }
    }

    /// Commits the list title editor. The editor closes either way.
    pub fn save_list_title(&mut self) -> Result<()> {
        let Some(editor) = self.editors.close_list_title() else {
            return Ok(());
        };
        self.edit_list_title(&editor.list_id, &editor.input)
    }

    pub fn cancel_list_title(&mut self) {
        self.editors.close_list_title();
    }

    pub fn edit_list_title(&mut self, list_id: &ListId, title: &str) -> Result<()> {
        let result = self
            .store_mut()
            .and_then(|store| store.edit_list_title(list_id, title));
        self.report(result, "List title updated")
    }

    pub fn delete_list(&mut self, list_id: &ListId) -> Result<()> {
        let result = self.store_mut().and_then(|store| store.delete_list(list_id));
        if let Ok(removed) = &result {
            self.editors.forget_list(list_id);
            let drag_removed = match self.drag.as_ref().map(DragSession::subject) {
                Some(DragSubject::List { list_id: dragged }) => dragged == list_id,
                Some(DragSubject::Card { card_id, .. }) => removed.card(card_id).is_some(),
                None => false,
            };
            if drag_removed {
                self.drag = None;
            }
        }
        self.report(result, "List deleted").map(|_| ())
    }

    pub fn reorder_lists(&mut self, from: usize, to: usize) -> Result<MoveOutcome> {
        match self.store_mut().and_then(|store| store.reorder_lists(from, to)) {
            Ok(outcome) => Ok(outcome),
            Err(err) => self.fail(err),
        }
    }

    // Cards

    /// Opens the card form on a list, pre-filled when `card_id` is given
    pub fn open_card_form(&mut self, list_id: &ListId, card_id: Option<&CardId>) -> Result<()> {
        let Some(list) = self.store().and_then(|store| store.list(list_id)) else {
            return self.fail(TaskflowError::ListNotFound(list_id.to_string()));
        };
        let card = match card_id {
            Some(id) => match list.card(id) {
                Some(card) => Some(card.clone()),
                None => return self.fail(TaskflowError::CardNotFound(id.to_string())),
            },
            None => None,
        };
        self.editors.open_card_form(list_id.clone(), card.as_ref());
        Ok(())
    }

    /// Edits the draft in the open card form
    pub fn card_draft_mut(&mut self) -> Option<&mut CardDraft> {
        self.editors.card_form_mut().map(|form| &mut form.draft)
    }

    pub fn toggle_draft_label(&mut self, label: Label) {
        if let Some(form) = self.editors.card_form_mut() {
            form.toggle_label(label);
        }
    }

    /// Saves the open card form as a new card or as an update. On failure
    /// the form stays open with its draft intact.
    pub fn save_card(&mut self) -> Result<Option<CardId>> {
        let Some(form) = self.editors.card_form().cloned() else {
            return Ok(None);
        };

        let saved = match &form.editing {
            Some(card_id) => self
                .edit_card(&form.list_id, card_id, form.draft.clone().into_patch())
                .map(|_| card_id.clone()),
            None => self.add_card(&form.list_id, form.draft.clone()),
        }?;

        self.editors.close_card_form();
        Ok(Some(saved))
    }

    pub fn cancel_card_form(&mut self) {
        self.editors.close_card_form();
    }

    pub fn add_card(&mut self, list_id: &ListId, draft: CardDraft) -> Result<CardId> {
        let result = self.store_mut().and_then(|store| store.add_card(list_id, draft));
        self.report(result, "Card added")
    }

    pub fn edit_card(&mut self, list_id: &ListId, card_id: &CardId, patch: CardPatch) -> Result<()> {
        let result = self
            .store_mut()
            .and_then(|store| store.edit_card(list_id, card_id, patch));
        self.report(result, "Card updated")
    }

    pub fn delete_card(&mut self, list_id: &ListId, card_id: &CardId) -> Result<()> {
        let result = self
            .store_mut()
            .and_then(|store| store.delete_card(list_id, card_id));
        if result.is_ok() {
            self.editors.forget_card(card_id);
            if matches!(
                self.drag.as_ref().map(DragSession::subject),
                Some(DragSubject::Card { card_id: dragged, .. }) if dragged == card_id
            ) {
                self.drag = None;
            }
        }
        self.report(result, "Card deleted").map(|_| ())
    }

    pub fn move_card(
        &mut self,
        source_list: &ListId,
        dest_list: &ListId,
        from: usize,
        to: usize,
    ) -> Result<MoveOutcome> {
        self.apply_move(Move::Card {
            source_list: source_list.clone(),
            dest_list: dest_list.clone(),
            from,
            to,
        })
    }

    fn apply_move(&mut self, instruction: Move) -> Result<MoveOutcome> {
        match self.store_mut().and_then(|store| store.apply_move(&instruction)) {
            Ok(outcome) => {
                if let Move::Card {
                    source_list,
                    dest_list,
                    ..
                } = &instruction
                {
                    if outcome == MoveOutcome::Moved && source_list != dest_list {
                        self.follow_edited_card();
                        let title = self
                            .store()
                            .and_then(|store| store.list(dest_list))
                            .map(|list| list.title.clone())
                            .unwrap_or_default();
                        self.succeed(Severity::Info, &format!("Card moved to {}", title));
                    }
                }
                Ok(outcome)
            }
            Err(err) => self.fail(err),
        }
    }

    /// Points an open edit form at the list that now holds its card
    fn follow_edited_card(&mut self) {
        let Some(card_id) = self.editors.card_form().and_then(|f| f.editing.clone()) else {
            return;
        };
        let holder = self
            .store()
            .and_then(|store| store.find_card(&card_id))
            .map(|(list, _)| list.id.clone());
        if let (Some(list_id), Some(form)) = (holder, self.editors.card_form_mut()) {
            form.list_id = list_id;
        }
    }

    // Drag and drop

    /// Starts dragging a card; replaces any drag already in progress
    pub fn begin_card_drag(&mut self, list_id: &ListId, card_id: &CardId) {
        self.drag = Some(DragSession::card(list_id.clone(), card_id.clone()));
    }

    pub fn begin_list_drag(&mut self, list_id: &ListId) {
        self.drag = Some(DragSession::list(list_id.clone()));
    }

    /// Abandons the current drag without touching the store
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Ends the current drag on `target`, applying at most one move
    pub fn drop_on(&mut self, target: &DropTarget) -> Result<MoveOutcome> {
        let Some(session) = self.drag.take() else {
            return Ok(MoveOutcome::Unchanged);
        };
        let resolved = match self.store() {
            Some(store) => session.resolve(store, target),
            None => Err(TaskflowError::BoardNotFound("no board is open".to_string())),
        };
        match resolved {
            Ok(Some(instruction)) => self.apply_move(instruction),
            Ok(None) => Ok(MoveOutcome::Unchanged),
            Err(err) => self.fail(err),
        }
    }
}
