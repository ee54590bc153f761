//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value slot contract used by identity and comment
//!   persistence.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Slot writes replace the whole value; there is no partial update.
//! - Reading a never-written slot yields `None`, not an error.

pub mod slot_repo;
