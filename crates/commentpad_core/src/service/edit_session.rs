//! Edit-session state machine.
//!
//! # Responsibility
//! - Track which comment, if any, is being edited and stage its draft text.
//! - Funnel saves through `CommentStore::edit` so permission checks apply.
//!
//! # Invariants
//! - At most one comment is in the editing state at any time.
//! - Starting a new edit discards an in-progress draft without saving it.
//! - Cancel never mutates the list.

use crate::model::identity::Identity;
use crate::repo::slot_repo::SlotRepository;
use crate::service::comment_store::{CommentStore, MutationOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Viewing,
    Editing { id: String, draft: String },
}

/// Single-slot editing state for a rendered comment list.
///
/// The caller wires `save` to focus loss or an explicit confirm key and
/// `cancel` to an abort action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    state: State,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            state: State::Viewing,
        }
    }

    /// Enters editing for `id`, seeding the draft from the current text.
    ///
    /// Any draft already in progress is discarded unsaved. Returns `false`
    /// and leaves the state untouched when the comment does not exist.
    pub fn begin<R: SlotRepository>(&mut self, store: &CommentStore<R>, id: &str) -> bool {
        match store.get(id) {
            Some(comment) => {
                self.state = State::Editing {
                    id: id.to_string(),
                    draft: comment.text.clone(),
                };
                true
            }
            None => false,
        }
    }

    /// Replaces the staged draft text. No-op while not editing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let State::Editing { draft, .. } = &mut self.state {
            *draft = text.into();
        }
    }

    /// Saves the draft through the store and returns to viewing.
    ///
    /// Returns `None` when nothing was being edited; otherwise the store's
    /// outcome. A comment deleted mid-edit resolves to `NotFound`, a
    /// non-author requester to `PermissionDenied`; either way the session
    /// ends up viewing.
    pub fn save<R: SlotRepository>(
        &mut self,
        store: &mut CommentStore<R>,
        requester: &Identity,
    ) -> Option<MutationOutcome> {
        let State::Editing { id, draft } = std::mem::replace(&mut self.state, State::Viewing)
        else {
            return None;
        };
        Some(store.edit(&id, &draft, requester))
    }

    /// Abandons the draft and returns to viewing without saving.
    pub fn cancel(&mut self) {
        self.state = State::Viewing;
    }

    /// Id of the comment currently being edited, if any.
    pub fn editing_id(&self) -> Option<&str> {
        match &self.state {
            State::Editing { id, .. } => Some(id),
            State::Viewing => None,
        }
    }

    /// Current staged draft text, if editing.
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            State::Editing { draft, .. } => Some(draft),
            State::Viewing => None,
        }
    }

    /// Returns whether `id` is the comment being edited.
    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id() == Some(id)
    }
}
