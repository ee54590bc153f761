//! Slot repository contracts and backends.
//!
//! # Responsibility
//! - Provide named string slots over local storage. The component's whole
//!   persistent surface is two such slots.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `read_slot` of an absent key returns `None`.
//! - `write_slot` replaces the whole stored value.

use crate::db::{migrations, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key holding the local author identifier.
pub const USER_ID_SLOT: &str = "userId";

/// Slot key holding the serialized comment list.
///
/// The legacy name suggests shared state; storage is strictly local and the
/// name is kept only for layout compatibility.
pub const COMMENTS_SLOT: &str = "sharedComments";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for slot persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection handed in without migrations applied.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value slot access used by identity and comment persistence.
pub trait SlotRepository {
    /// Reads the current value of `key`, `None` when never written.
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>>;
    /// Replaces the value of `key`.
    fn write_slot(&mut self, key: &str, value: &str) -> RepoResult<()>;
    /// Removes `key`. Absent keys are a no-op.
    fn clear_slot(&mut self, key: &str) -> RepoResult<()>;
}

/// SQLite-backed slot repository over the `slots` table.
#[derive(Debug)]
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected_version = migrations::latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write_slot(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn clear_slot(&mut self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// In-memory slot backend.
///
/// Serves tests and the fallback path when no persistent backend is
/// available; contents do not survive the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotRepository {
    slots: HashMap<String, String>,
}

impl MemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotRepository for MemorySlotRepository {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear_slot(&mut self, key: &str) -> RepoResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}
