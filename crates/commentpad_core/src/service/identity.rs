//! Identity provider service.
//!
//! # Responsibility
//! - Produce and stably persist the device-local pseudo-identity.
//!
//! # Invariants
//! - Once resolved, the same identity is returned for the rest of the
//!   session, even when the backend stops accepting writes.
//! - A stored identifier is never regenerated while its slot exists.

use crate::clock::now_epoch_millis;
use crate::model::identity::Identity;
use crate::repo::slot_repo::{SlotRepository, USER_ID_SLOT};
use log::{info, warn};

/// Prefix for generated author identifiers.
const USER_ID_PREFIX: &str = "user-";

/// Lazily creates and caches the local pseudo-identity.
#[derive(Debug, Default)]
pub struct IdentityProvider {
    cached: Option<Identity>,
}

impl IdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the device identity, creating and persisting it on first use.
    ///
    /// # Contract
    /// - Repeat calls within a session return the same identity.
    /// - A failing backend read or write degrades to an ephemeral identity
    ///   that lives for this session only; no error is surfaced.
    pub fn get_or_create<R: SlotRepository>(&mut self, repo: &mut R) -> Identity {
        if let Some(identity) = &self.cached {
            return identity.clone();
        }

        let stored = match repo.read_slot(USER_ID_SLOT) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=identity_load module=identity status=error error={err}");
                None
            }
        };

        let identity = match stored {
            Some(user_id) => Identity::from_user_id(user_id),
            None => {
                let user_id = format!("{USER_ID_PREFIX}{}", now_epoch_millis());
                match repo.write_slot(USER_ID_SLOT, &user_id) {
                    Ok(()) => {
                        info!("event=identity_create module=identity status=ok user_id={user_id}");
                    }
                    Err(err) => {
                        warn!(
                            "event=identity_persist module=identity status=error user_id={user_id} error={err}"
                        );
                    }
                }
                Identity::from_user_id(user_id)
            }
        };

        self.cached = Some(identity.clone());
        identity
    }
}
