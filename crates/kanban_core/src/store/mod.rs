//! Snapshot persistence boundary.
//!
//! # Responsibility
//! - Define the adapter contract the board store persists through.
//! - Provide an in-process adapter for tests and storage-free embedders.
//!
//! # Invariants
//! - The whole board collection is one serialized document under one key:
//!   loads are wholesale at startup, saves are wholesale after mutations.
//! - Load paths reject invalid persisted documents instead of masking them.

use crate::db::DbError;
use crate::model::board::Board;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from snapshot load/save operations.
#[derive(Debug)]
pub enum StoreError {
    /// Connection bootstrap or SQL failure in the sqlite adapter.
    Db(DbError),
    /// The board collection could not be serialized.
    Serialize(serde_json::Error),
    /// Persisted document exists but cannot be decoded.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize snapshot: {err}"),
            Self::InvalidData(message) => write!(f, "invalid snapshot document: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Adapter contract for loading and saving the full board collection.
pub trait SnapshotStore {
    /// Loads the full collection. An empty store yields an empty vec.
    fn load(&self) -> StoreResult<Vec<Board>>;

    /// Replaces the persisted collection with `boards`, atomically.
    fn save(&self, boards: &[Board]) -> StoreResult<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn load(&self) -> StoreResult<Vec<Board>> {
        (**self).load()
    }

    fn save(&self, boards: &[Board]) -> StoreResult<()> {
        (**self).save(boards)
    }
}

/// In-process snapshot store holding the serialized document in memory.
///
/// Keeps the blob in serialized form so callers observe the same
/// encode/decode behavior as the durable adapters.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    blob: RefCell<Option<String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw persisted document, if any. Test hook for
    /// byte-level round-trip assertions.
    pub fn raw_blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> StoreResult<Vec<Board>> {
        match self.blob.borrow().as_deref() {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw)
                .map_err(|err| StoreError::InvalidData(err.to_string())),
        }
    }

    fn save(&self, boards: &[Board]) -> StoreResult<()> {
        let raw = serde_json::to_string(boards).map_err(StoreError::Serialize)?;
        *self.blob.borrow_mut() = Some(raw);
        Ok(())
    }
}
