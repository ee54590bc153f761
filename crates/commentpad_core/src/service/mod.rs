//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate slot persistence into identity and comment use-cases.
//! - Keep presentation callers decoupled from storage details.

pub mod comment_store;
pub mod edit_session;
pub mod identity;
