//! `ConceptStore` implementation over SQLite.

use rusqlite::{params, OptionalExtension};
use tracing::{debug, info};

use lexica_core::{AdjectiveSet, ConceptStore, StorageResult};

use crate::config::SqliteConfig;
use crate::connection::SqlitePool;
use crate::error::SqliteResult;
use crate::schema;

/// SQLite-backed concept store.
///
/// All statements bind tokens as parameters; no user input ever reaches the
/// SQL text. Callers are expected to `bootstrap()` before the first upsert.
#[derive(Clone)]
pub struct SqliteConceptStore {
    pool: SqlitePool,
}

impl SqliteConceptStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at the configured path.
    pub fn open(config: SqliteConfig) -> SqliteResult<Self> {
        Ok(Self::new(SqlitePool::new(config)?))
    }

    fn fetch_adjs(
        conn: &rusqlite::Connection,
        root: &str,
    ) -> SqliteResult<Option<String>> {
        let adjs = conn
            .query_row(
                "SELECT adjs FROM concepts WHERE root = ?1",
                [root],
                |row| row.get(0),
            )
            .optional()?;
        Ok(adjs)
    }
}

impl ConceptStore for SqliteConceptStore {
    fn lookup(&self, root: &str) -> StorageResult<Option<AdjectiveSet>> {
        let result = self.pool.with_connection(|conn| {
            if !schema::concepts_table_exists(conn)? {
                return Ok(None);
            }
            Ok(Self::fetch_adjs(conn, root)?.map(|joined| AdjectiveSet::from_joined(&joined)))
        });
        result.map_err(Into::into)
    }

    fn upsert(&self, root: &str, adjective: &str) -> StorageResult<bool> {
        let root = root.to_string();
        let adjective = adjective.to_string();
        let result = self.pool.with_connection(|conn| {
            match Self::fetch_adjs(conn, &root)? {
                None => {
                    debug!(%root, %adjective, "inserting new root");
                    conn.execute(
                        "INSERT INTO concepts (root, adjs) VALUES (?1, ?2)",
                        params![root, adjective],
                    )?;
                    Ok(true)
                }
                Some(joined) => {
                    let mut set = AdjectiveSet::from_joined(&joined);
                    if set.insert(&adjective) {
                        debug!(%root, %adjective, "adding adjective to existing root");
                        conn.execute(
                            "UPDATE concepts SET adjs = ?1 WHERE root = ?2",
                            params![set.to_joined(), root],
                        )?;
                        Ok(true)
                    } else {
                        debug!(%root, %adjective, "concept already stored");
                        Ok(false)
                    }
                }
            }
        });
        result.map_err(Into::into)
    }

    fn clear(&self) -> StorageResult<bool> {
        let result = self.pool.with_connection(|conn| {
            if !schema::concepts_table_exists(conn)? {
                return Ok(false);
            }
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM concepts", [], |row| row.get(0))?;
            if count == 0 {
                return Ok(false);
            }
            info!(count, "deleting stored concepts");
            conn.execute("DELETE FROM concepts", [])?;
            Ok(true)
        });
        result.map_err(Into::into)
    }

    fn is_empty(&self) -> StorageResult<bool> {
        let result = self.pool.with_connection(|conn| {
            if !schema::concepts_table_exists(conn)? {
                return Ok(true);
            }
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM concepts", [], |row| row.get(0))?;
            Ok(count == 0)
        });
        result.map_err(Into::into)
    }

    fn bootstrap(&self) -> StorageResult<bool> {
        let result = self.pool.with_connection(|conn| {
            if schema::concepts_table_exists(conn)? {
                return Ok(false);
            }
            schema::create_concepts_table(conn)?;
            info!("concept store initialized");
            Ok(true)
        });
        result.map_err(Into::into)
    }
}
