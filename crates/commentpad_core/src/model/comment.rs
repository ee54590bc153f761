//! Comment domain model.
//!
//! # Responsibility
//! - Define the comment record shape shared by the in-memory list and the
//!   persisted payload.
//!
//! # Invariants
//! - `id` is the sole identity key within a list.
//! - `timestamp`, `author_id` and `author_name` never change after creation.

use crate::model::identity::Identity;
use serde::{Deserialize, Serialize};

/// Single comment entry.
///
/// Serialized field names follow the legacy slot layout (`userId`,
/// `username`) so previously persisted lists keep loading unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique id, derived from the creation clock.
    pub id: String,
    /// User-supplied body text. The only mutable field.
    pub text: String,
    /// Human-readable creation time. Not updated on edit.
    pub timestamp: String,
    /// Id of the identity that created this comment.
    #[serde(rename = "userId")]
    pub author_id: String,
    /// Display label of the author, captured at creation time.
    #[serde(rename = "username")]
    pub author_name: String,
}

impl Comment {
    /// Creates a comment owned by `author`.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        timestamp: impl Into<String>,
        author: &Identity,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            timestamp: timestamp.into(),
            author_id: author.user_id.clone(),
            author_name: author.display_name.clone(),
        }
    }

    /// Returns whether `identity` authored this comment.
    pub fn is_authored_by(&self, identity: &Identity) -> bool {
        self.author_id == identity.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::Comment;
    use crate::model::identity::Identity;

    #[test]
    fn serialization_uses_legacy_slot_fields() {
        let author = Identity::from_user_id("user-1755000000000");
        let comment = Comment::new("1755000000001", "hello", "2026-08-07 10:00:00", &author);

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["id"], "1755000000001");
        assert_eq!(json["text"], "hello");
        assert_eq!(json["timestamp"], "2026-08-07 10:00:00");
        assert_eq!(json["userId"], "user-1755000000000");
        assert_eq!(json["username"], "User 0000");

        let decoded: Comment = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, comment);
    }

    #[test]
    fn authorship_check_compares_user_id_only() {
        let author = Identity::from_user_id("user-1");
        let other = Identity::from_user_id("user-2");
        let comment = Comment::new("1", "text", "now", &author);

        assert!(comment.is_authored_by(&author));
        assert!(!comment.is_authored_by(&other));
    }
}
