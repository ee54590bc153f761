//! Local pseudo-identity model.
//!
//! # Responsibility
//! - Represent the device-local author identity used to gate edit/delete.
//!
//! # Invariants
//! - `display_name` is a pure derivation of `user_id`; the pair never
//!   diverges.

/// Device-local pseudo-identity.
///
/// There is no authentication behind this; the id only distinguishes
/// authors within one local storage instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Stable author identifier, persisted in the user id slot.
    pub user_id: String,
    /// Display label derived from `user_id`.
    pub display_name: String,
}

impl Identity {
    /// Builds an identity from a stored or freshly generated user id.
    pub fn from_user_id(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let display_name = derive_display_name(&user_id);
        Self {
            user_id,
            display_name,
        }
    }
}

/// Derives the display label: fixed prefix plus the trailing four
/// characters of the id. Ids shorter than four characters are used whole.
pub fn derive_display_name(user_id: &str) -> String {
    let chars: Vec<char> = user_id.chars().collect();
    let start = chars.len().saturating_sub(4);
    let suffix: String = chars[start..].iter().collect();
    format!("User {suffix}")
}
