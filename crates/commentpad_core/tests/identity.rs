use commentpad_core::db::DbError;
use commentpad_core::{
    IdentityProvider, MemorySlotRepository, RepoError, RepoResult, SlotRepository, USER_ID_SLOT,
};

#[test]
fn first_use_creates_and_persists_user_id() {
    let mut repo = MemorySlotRepository::new();
    let mut provider = IdentityProvider::new();

    let identity = provider.get_or_create(&mut repo);
    assert!(identity.user_id.starts_with("user-"));
    assert!(identity.display_name.starts_with("User "));

    let stored = repo.read_slot(USER_ID_SLOT).unwrap();
    assert_eq!(stored.as_deref(), Some(identity.user_id.as_str()));
}

#[test]
fn stored_identifier_is_reused_not_regenerated() {
    let mut repo = MemorySlotRepository::new();
    repo.write_slot(USER_ID_SLOT, "user-1755001234567").unwrap();

    let identity = IdentityProvider::new().get_or_create(&mut repo);
    assert_eq!(identity.user_id, "user-1755001234567");
    assert_eq!(identity.display_name, "User 4567");
}

#[test]
fn repeat_calls_return_the_same_identity() {
    let mut repo = MemorySlotRepository::new();
    let mut provider = IdentityProvider::new();

    let first = provider.get_or_create(&mut repo);
    let second = provider.get_or_create(&mut repo);
    assert_eq!(first, second);
}

#[test]
fn separate_providers_resolve_the_same_stored_identity() {
    let mut repo = MemorySlotRepository::new();

    let first = IdentityProvider::new().get_or_create(&mut repo);
    let second = IdentityProvider::new().get_or_create(&mut repo);
    assert_eq!(first, second);
}

#[test]
fn clearing_the_slot_yields_a_fresh_identity_next_session() {
    let mut repo = MemorySlotRepository::new();
    repo.write_slot(USER_ID_SLOT, "user-legacy-0001").unwrap();

    let first = IdentityProvider::new().get_or_create(&mut repo);
    assert_eq!(first.user_id, "user-legacy-0001");

    repo.clear_slot(USER_ID_SLOT).unwrap();

    // A new provider stands in for a fresh session; with the slot gone the
    // identifier is generated anew.
    let second = IdentityProvider::new().get_or_create(&mut repo);
    assert!(second.user_id.starts_with("user-"));
    assert_ne!(second.user_id, "user-legacy-0001");
}

/// Backend stub with no working persistence at all.
struct UnavailableRepository;

impl SlotRepository for UnavailableRepository {
    fn read_slot(&self, _key: &str) -> RepoResult<Option<String>> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        )))
    }

    fn write_slot(&mut self, _key: &str, _value: &str) -> RepoResult<()> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        )))
    }

    fn clear_slot(&mut self, _key: &str) -> RepoResult<()> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        )))
    }
}

#[test]
fn unavailable_backend_yields_stable_ephemeral_identity() {
    let mut repo = UnavailableRepository;
    let mut provider = IdentityProvider::new();

    let first = provider.get_or_create(&mut repo);
    let second = provider.get_or_create(&mut repo);

    assert!(first.user_id.starts_with("user-"));
    // Same identity for the whole session, despite the backend failing.
    assert_eq!(first, second);
}
