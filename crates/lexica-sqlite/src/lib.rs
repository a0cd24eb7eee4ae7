//! SQLite storage backend for Lexica.
//!
//! Provides a [`SqliteConceptStore`] implementing `lexica_core`'s
//! `ConceptStore` trait over a single `concepts` table.
//!
//! ## Features
//!
//! - **Parameterized statements**: user tokens are bound, never interpolated
//!   into SQL text
//! - **WAL mode**: enabled by default for on-disk databases
//! - **Thread safety**: `Arc<Mutex<Connection>>` wrapper
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lexica_sqlite::{SqliteConceptStore, SqliteConfig};
//! use lexica_core::ConceptStore;
//!
//! let store = SqliteConceptStore::open(SqliteConfig::new("./concepts.db"))?;
//! store.bootstrap()?;
//! store.upsert("car", "red")?;
//! ```

pub mod concept_store;
pub mod config;
pub mod connection;
pub mod error;
pub mod schema;

pub use concept_store::SqliteConceptStore;
pub use config::SqliteConfig;
pub use connection::SqlitePool;
pub use error::{SqliteError, SqliteResult};
