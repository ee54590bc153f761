//! Comment id generation.
//!
//! # Responsibility
//! - Issue unique string ids derived from the creation clock.
//!
//! # Invariants
//! - Ids issued by one generator are strictly increasing, even when the
//!   clock reports the same millisecond twice.

use crate::clock::now_epoch_millis;

/// Clock-derived id source for comments.
///
/// Uniqueness only has to hold within one local storage instance, so a
/// millisecond clock with a monotonic guard is sufficient.
#[derive(Debug, Default)]
pub struct CommentIdGenerator {
    last_issued: i64,
}

impl CommentIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next unique comment id.
    ///
    /// Same-millisecond calls advance past the last issued value instead of
    /// repeating it.
    pub fn next_id(&mut self) -> String {
        let now = now_epoch_millis();
        let issued = if now > self.last_issued {
            now
        } else {
            self.last_issued + 1
        };
        self.last_issued = issued;
        issued.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::CommentIdGenerator;
    use std::collections::HashSet;

    #[test]
    fn rapid_issuance_stays_unique() {
        let mut generator = CommentIdGenerator::new();
        let ids: HashSet<String> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn issued_ids_are_strictly_increasing() {
        let mut generator = CommentIdGenerator::new();
        let mut previous: i64 = 0;
        for _ in 0..100 {
            let issued: i64 = generator.next_id().parse().unwrap();
            assert!(issued > previous);
            previous = issued;
        }
    }
}
