use crate::domain::{Card, CardDraft, CardId, Label, ListId};

/// Inline editor for a list title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTitleEditor {
    pub list_id: ListId,
    pub input: String,
}

/// Card form attached to a list, either creating or editing a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    pub list_id: ListId,
    pub editing: Option<CardId>,
    pub draft: CardDraft,
}

impl CardForm {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn toggle_label(&mut self, label: Label) {
        self.draft.toggle_label(label);
    }
}

/// Which editors are open. At most one of each kind exists, so opening an
/// editor replaces any other of the same kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    list_title: Option<ListTitleEditor>,
    card_form: Option<CardForm>,
}

impl EditorState {
    pub fn list_title(&self) -> Option<&ListTitleEditor> {
        self.list_title.as_ref()
    }

    pub fn list_title_mut(&mut self) -> Option<&mut ListTitleEditor> {
        self.list_title.as_mut()
    }

    pub fn card_form(&self) -> Option<&CardForm> {
        self.card_form.as_ref()
    }

    pub fn card_form_mut(&mut self) -> Option<&mut CardForm> {
        self.card_form.as_mut()
    }

    pub fn open_list_title(&mut self, list_id: ListId, current: &str) {
        self.list_title = Some(ListTitleEditor {
            list_id,
            input: current.to_string(),
        });
    }

    pub fn close_list_title(&mut self) -> Option<ListTitleEditor> {
        self.list_title.take()
    }

    /// Opens a blank form, or one pre-filled from `card` when editing
    pub fn open_card_form(&mut self, list_id: ListId, card: Option<&Card>) {
        self.card_form = Some(CardForm {
            list_id,
            editing: card.map(|c| c.id.clone()),
            draft: card.map(Card::to_draft).unwrap_or_default(),
        });
    }

    pub fn close_card_form(&mut self) -> Option<CardForm> {
        self.card_form.take()
    }

    /// Closes any editor pointing at a list that no longer exists
    pub(crate) fn forget_list(&mut self, list_id: &ListId) {
        if self.list_title.as_ref().is_some_and(|e| &e.list_id == list_id) {
            self.list_title = None;
        }
        if self.card_form.as_ref().is_some_and(|f| &f.list_id == list_id) {
            self.card_form = None;
        }
    }

    /// Closes the card form if it is editing the given card
    pub(crate) fn forget_card(&mut self, card_id: &CardId) {
        if self
            .card_form
            .as_ref()
            .is_some_and(|f| f.editing.as_ref() == Some(card_id))
        {
            self.card_form = None;
        }
    }

    pub fn close_all(&mut self) {
        self.list_title = None;
        self.card_form = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_list_editor_replaces_previous() {
        let mut editors = EditorState::default();
        let a = ListId::generate();
        let b = ListId::generate();

        editors.open_list_title(a, "To Do");
        editors.open_list_title(b.clone(), "Done");

        let open = editors.list_title().unwrap();
        assert_eq!(open.list_id, b);
        assert_eq!(open.input, "Done");
    }

    #[test]
    fn test_card_form_for_existing_card_is_prefilled() {
        let mut editors = EditorState::default();
        let card = Card::from_draft(
            CardId::generate(),
            CardDraft::new("Write docs").with_label(Label::Feature),
        )
        .unwrap();
        let list = ListId::generate();

        editors.open_card_form(list.clone(), Some(&card));
        let form = editors.card_form().unwrap();
        assert!(form.is_editing());
        assert_eq!(form.draft.title, "Write docs");
        assert_eq!(form.draft.labels, vec![Label::Feature]);

        editors.open_card_form(list, None);
        let form = editors.card_form().unwrap();
        assert!(!form.is_editing());
        assert_eq!(form.draft, CardDraft::default());
    }

    #[test]
    fn test_list_and_card_editors_are_independent() {
        let mut editors = EditorState::default();
        let list = ListId::generate();
        editors.open_list_title(list.clone(), "To Do");
        editors.open_card_form(list.clone(), None);

        assert!(editors.list_title().is_some());
        assert!(editors.card_form().is_some());

        editors.forget_list(&list);
        assert_eq!(editors, EditorState::default());
    }
}
