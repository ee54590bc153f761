//! Core domain logic for commentpad.
//! This crate is the single source of truth for comment-list invariants.

pub mod clock;
pub mod db;
pub mod id;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::comment::Comment;
pub use model::identity::Identity;
pub use repo::slot_repo::{
    MemorySlotRepository, RepoError, RepoResult, SlotRepository, SqliteSlotRepository,
    COMMENTS_SLOT, USER_ID_SLOT,
};
pub use service::comment_store::{CommentStore, MutationOutcome};
pub use service::edit_session::EditSession;
pub use service::identity::IdentityProvider;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
