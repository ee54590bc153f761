//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `commentpad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use commentpad_core::{CommentStore, IdentityProvider, MemorySlotRepository};

fn main() {
    println!("commentpad_core ping={}", commentpad_core::ping());
    println!("commentpad_core version={}", commentpad_core::core_version());

    // One in-memory round through the core: resolve an identity, post a
    // comment, count the list.
    let mut repo = MemorySlotRepository::new();
    let author = IdentityProvider::new().get_or_create(&mut repo);
    let mut store = CommentStore::open(repo);
    match store.add("smoke check", &author) {
        Some(comment) => println!(
            "commentpad_core smoke_comment author={} count={}",
            comment.author_name,
            store.comments().len()
        ),
        None => println!("commentpad_core smoke_comment rejected"),
    }
}
