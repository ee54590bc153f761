//! Comment store use-case service.
//!
//! # Responsibility
//! - Own the in-memory comment list and its ordering.
//! - Enforce the author-only rule for edit and delete.
//! - Mirror every mutation to the comments slot as one JSON payload.
//!
//! # Invariants
//! - The list is ordered newest-insertion-first; edits never reorder it.
//! - `id` is unique across the list.
//! - Permission checks live here; presentation-layer gating is not trusted.
//! - A failed slot write switches the store to in-memory-only operation for
//!   the remainder of the session.

use crate::clock::display_timestamp;
use crate::id::CommentIdGenerator;
use crate::model::comment::Comment;
use crate::model::identity::Identity;
use crate::repo::slot_repo::{SlotRepository, COMMENTS_SLOT};
use log::{error, info, warn};

/// Result of an edit or delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The mutation was applied.
    Applied,
    /// No comment with the requested id exists; nothing changed.
    NotFound,
    /// The requester is not the author; nothing changed.
    PermissionDenied,
}

impl MutationOutcome {
    /// Returns whether the request mutated the list.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persistence {
    Active,
    /// The backend refused a read or write; mutations stay in memory only.
    InMemoryOnly,
}

/// Ordered comment list with slot-backed persistence.
///
/// All mutations are synchronous; each one rewrites the whole list into the
/// comments slot, matching the single-writer model of the component.
pub struct CommentStore<R: SlotRepository> {
    repo: R,
    comments: Vec<Comment>,
    ids: CommentIdGenerator,
    persistence: Persistence,
}

impl<R: SlotRepository> CommentStore<R> {
    /// Opens the store, loading the persisted list.
    ///
    /// # Contract
    /// - An absent slot yields an empty list.
    /// - A malformed payload is discarded with a warning; the next persisted
    ///   mutation overwrites it.
    /// - A failing backend read yields an empty list and leaves the store in
    ///   in-memory-only mode.
    pub fn open(repo: R) -> Self {
        let mut persistence = Persistence::Active;
        let comments = match repo.read_slot(COMMENTS_SLOT) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Comment>>(&payload) {
                Ok(list) => {
                    info!(
                        "event=comments_load module=store status=ok count={}",
                        list.len()
                    );
                    list
                }
                Err(err) => {
                    warn!("event=comments_load module=store status=discarded error={err}");
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("event=comments_load module=store status=ok count=0");
                Vec::new()
            }
            Err(err) => {
                error!("event=comments_load module=store status=error error={err}");
                persistence = Persistence::InMemoryOnly;
                Vec::new()
            }
        };

        Self {
            repo,
            comments,
            ids: CommentIdGenerator::new(),
            persistence,
        }
    }

    /// Adds a new comment to the front of the list.
    ///
    /// Returns `None` without touching the list when `text` trims to empty.
    /// New comments always sort to the front regardless of any timestamp.
    pub fn add(&mut self, text: &str, author: &Identity) -> Option<Comment> {
        if text.trim().is_empty() {
            return None;
        }

        let comment = Comment::new(self.ids.next_id(), text, display_timestamp(), author);
        self.comments.insert(0, comment.clone());
        self.persist();
        info!(
            "event=comment_add module=store status=ok id={} author={}",
            comment.id, comment.author_id
        );
        Some(comment)
    }

    /// Replaces the text of the comment with `id`.
    ///
    /// Only the author may edit; `timestamp`, author fields and list
    /// position are left untouched.
    pub fn edit(&mut self, id: &str, new_text: &str, requester: &Identity) -> MutationOutcome {
        let Some(comment) = self.comments.iter_mut().find(|comment| comment.id == id) else {
            return MutationOutcome::NotFound;
        };

        if !comment.is_authored_by(requester) {
            warn!(
                "event=comment_edit module=store status=denied id={id} requester={}",
                requester.user_id
            );
            return MutationOutcome::PermissionDenied;
        }

        comment.text = new_text.to_string();
        self.persist();
        info!("event=comment_edit module=store status=ok id={id}");
        MutationOutcome::Applied
    }

    /// Removes the comment with `id`. At most one entry is removed.
    ///
    /// Only the author may delete.
    pub fn delete(&mut self, id: &str, requester: &Identity) -> MutationOutcome {
        let Some(position) = self.comments.iter().position(|comment| comment.id == id) else {
            return MutationOutcome::NotFound;
        };

        if !self.comments[position].is_authored_by(requester) {
            warn!(
                "event=comment_delete module=store status=denied id={id} requester={}",
                requester.user_id
            );
            return MutationOutcome::PermissionDenied;
        }

        self.comments.remove(position);
        self.persist();
        info!("event=comment_delete module=store status=ok id={id}");
        MutationOutcome::Applied
    }

    /// Current list, newest insertion first.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Looks up one comment by id.
    pub fn get(&self, id: &str) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    /// Returns whether mutations still reach the persistent backend.
    pub fn is_persistent(&self) -> bool {
        self.persistence == Persistence::Active
    }

    /// Releases the underlying repository.
    pub fn into_inner(self) -> R {
        self.repo
    }

    fn persist(&mut self) {
        if self.persistence == Persistence::InMemoryOnly {
            return;
        }

        let payload = match serde_json::to_string(&self.comments) {
            Ok(payload) => payload,
            Err(err) => {
                error!("event=comments_persist module=store status=error error={err}");
                self.persistence = Persistence::InMemoryOnly;
                return;
            }
        };

        if let Err(err) = self.repo.write_slot(COMMENTS_SLOT, &payload) {
            error!("event=comments_persist module=store status=error error={err}");
            self.persistence = Persistence::InMemoryOnly;
        }
    }
}
