//! SQLite backend configuration.

use std::path::PathBuf;

/// Connection settings for the SQLite backend.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file path, or `:memory:` for an in-memory database.
    pub path: PathBuf,
    /// Enable write-ahead logging. Ignored for in-memory databases.
    pub wal_mode: bool,
    /// Busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
}

impl SqliteConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            wal_mode: true,
            busy_timeout_ms: 5_000,
        }
    }

    /// Configuration for an in-memory database, used in tests.
    pub fn memory() -> Self {
        Self {
            path: PathBuf::from(":memory:"),
            wal_mode: false,
            busy_timeout_ms: 5_000,
        }
    }

    pub(crate) fn is_memory(&self) -> bool {
        self.path.to_str() == Some(":memory:")
    }
}
