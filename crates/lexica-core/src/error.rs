//! Error types for concept ingestion and querying.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::StorageError;

/// Domain error type shared by the ingestion and query engines.
#[derive(Error, Debug)]
pub enum ConceptError {
    /// A source file or directory does not exist.
    #[error("file or directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A concept definition line had more than two tokens. Fatal to the
    /// current batch; callers decide whether to terminate the process.
    #[error("concept definitions support at most one adjective plus one root: {line:?}")]
    MalformedConcept { line: String },

    /// The backing store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A query was attempted against a store with no concepts. Distinct from
    /// a legitimate zero-match result.
    #[error("no concepts in the store; add concepts before querying")]
    EmptyStore,
}

/// Result type for concept operations.
pub type ConceptResult<T> = Result<T, ConceptError>;
