use crate::domain::{CardId, ListId, ListStore, Move};
use crate::error::{Result, TaskflowError};

/// What is being dragged, captured when the gesture begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSubject {
    Card { list_id: ListId, card_id: CardId },
    List { list_id: ListId },
}

/// Where the dragged item was released
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Anywhere on a list; cards are appended
    List(ListId),
    /// A specific slot within a list's cards
    Slot { list_id: ListId, index: usize },
}

impl DropTarget {
    pub fn list_id(&self) -> &ListId {
        match self {
            Self::List(id) | Self::Slot { list_id: id, .. } => id,
        }
    }
}

/// A drag gesture in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    subject: DragSubject,
}

impl DragSession {
    pub fn card(list_id: ListId, card_id: CardId) -> Self {
        Self {
            subject: DragSubject::Card { list_id, card_id },
        }
    }

    pub fn list(list_id: ListId) -> Self {
        Self {
            subject: DragSubject::List { list_id },
        }
    }

    pub fn subject(&self) -> &DragSubject {
        &self.subject
    }

    /// Finds the dragged card, checking its origin list before the rest of
    /// the store.
    fn locate(store: &ListStore, origin: &ListId, card_id: &CardId) -> Result<(usize, usize)> {
        let in_origin = store.position_of(origin).and_then(|li| {
            store.lists()[li]
                .position_of(card_id)
                .map(|ci| (li, ci))
        });
        in_origin
            .or_else(|| store.locate_card(card_id))
            .ok_or_else(|| TaskflowError::CardNotFound(card_id.to_string()))
    }

    /// Translates the drop into a move against current positions in
    /// `store`. `Ok(None)` means the drop changes nothing.
    pub fn resolve(&self, store: &ListStore, target: &DropTarget) -> Result<Option<Move>> {
        let dest = store.require_position(target.list_id())?;

        match &self.subject {
            DragSubject::List { list_id } => {
                let from = store.require_position(list_id)?;
                Ok((from != dest).then(|| Move::List { from, to: dest }))
            }
            DragSubject::Card { list_id, card_id } => {
                let (src, from) = Self::locate(store, list_id, card_id)?;
                let source_list = store.lists()[src].id.clone();
                let dest_list = target.list_id().clone();
                let dest_len = store.lists()[dest].len();

                let to = match target {
                    DropTarget::List(_) if src == dest => return Ok(None),
                    DropTarget::List(_) => dest_len,
                    DropTarget::Slot { index, .. } if src == dest => {
                        let to = (*index).min(dest_len - 1);
                        if to == from {
                            return Ok(None);
                        }
                        to
                    }
                    DropTarget::Slot { index, .. } => *index,
                };
                Ok(Some(Move::Card {
                    source_list,
                    dest_list,
                    from,
                    to,
                }))
            }
        }
    }
}
