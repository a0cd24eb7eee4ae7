//! Schema management for the `concepts` table.

use rusqlite::Connection;
use tracing::debug;

use crate::error::{SqliteError, SqliteResult};

/// The single persisted table: root → `,`-joined adjective set.
const CONCEPTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS concepts (
    root TEXT PRIMARY KEY NOT NULL,
    adjs TEXT NOT NULL
);
"#;

/// Whether the `concepts` table exists.
pub fn concepts_table_exists(conn: &Connection) -> SqliteResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'concepts'",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Create the `concepts` table.
pub fn create_concepts_table(conn: &Connection) -> SqliteResult<()> {
    debug!("creating concepts table");
    conn.execute_batch(CONCEPTS_TABLE)
        .map_err(|e| SqliteError::Schema(format!("failed to create concepts table: {e}")))?;
    Ok(())
}
