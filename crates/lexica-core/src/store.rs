//! Storage abstraction over the persistent concept table.

use thiserror::Error;

use crate::concept::AdjectiveSet;

/// Error type surfaced by [`ConceptStore`] implementations.
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("corrupted data: {0}")]
    Corrupted(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Persistent table of concept records: root → set of adjectives.
///
/// The store performs no normalization; callers pass tokens that are already
/// trimmed and lowercased, and `lookup` is an exact string match. Every root
/// present in the store has a non-empty adjective set (at least one real
/// adjective or the bare-root sentinel).
pub trait ConceptStore {
    /// Return the stored adjective set for an exact-match root, if any.
    fn lookup(&self, root: &str) -> StorageResult<Option<AdjectiveSet>>;

    /// Create the record `{adjective}` if `root` is absent, otherwise add
    /// `adjective` to the existing set. Returns whether anything was actually
    /// added; repeating the same call is a no-op reporting `false`.
    fn upsert(&self, root: &str, adjective: &str) -> StorageResult<bool>;

    /// Remove all records. Returns whether any record existed beforehand.
    fn clear(&self) -> StorageResult<bool>;

    /// True when the store holds no records, including when the backing
    /// structure has never been bootstrapped.
    fn is_empty(&self) -> StorageResult<bool>;

    /// Create the backing structure if it does not already exist. Returns
    /// whether it had to be created; calling twice is safe.
    fn bootstrap(&self) -> StorageResult<bool>;
}
