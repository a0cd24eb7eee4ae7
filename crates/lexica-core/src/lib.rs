//! Core domain logic for Lexica, a two-word concept vocabulary store.
//!
//! A *concept* is either a bare root noun (`"car"`) or an adjective-root pair
//! (`"red car"`). Concepts are ingested from definition files into a
//! [`ConceptStore`] keyed by root, and free-text sentences are later scanned
//! for mentions of known concepts.
//!
//! ## Key components
//!
//! - [`concept`]: the concept record model and definition-line parsing
//! - [`store`]: the storage trait consumed by both engines
//! - [`ingest`]: merges definition lines into a store
//! - [`query`]: scans sentences for stored concepts
//! - [`memory`]: in-memory store, used by tests and embedders
//!
//! The engines hold no state of their own; they are functions over a store
//! reference plus their inputs.

pub mod concept;
pub mod error;
pub mod ingest;
pub mod memory;
pub mod query;
pub mod stopwords;
pub mod store;

pub use concept::{AdjectiveSet, ConceptDef, BARE_SENTINEL, NO_MATCH};
pub use error::{ConceptError, ConceptResult};
pub use ingest::ConceptFileFilter;
pub use memory::MemoryConceptStore;
pub use query::Mention;
pub use store::{ConceptStore, StorageError, StorageResult};
