//! `add_concepts` and `add_concepts_dir` subcommands.

use std::path::Path;

use anyhow::Result;

use lexica_core::{ingest, ConceptError, ConceptFileFilter, ConceptStore};

/// Ingest one concept-definition file and report the count of new concepts.
///
/// A missing file is reported and treated as zero new concepts rather than a
/// fatal error, matching the original tool's behavior.
pub fn add_concepts<S: ConceptStore>(store: &S, fname: &Path) -> Result<()> {
    store.bootstrap()?;
    match ingest::ingest_file(store, fname) {
        Ok(new_concepts) => {
            println!("Added {new_concepts} new concepts");
            Ok(())
        }
        Err(ConceptError::NotFound(path)) => {
            println!("File {} not found", path.display());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Ingest every matching concept file in a directory and report the total.
pub fn add_concepts_dir<S: ConceptStore>(
    store: &S,
    dirname: &Path,
    filter: &ConceptFileFilter,
) -> Result<()> {
    store.bootstrap()?;
    let new_concepts = ingest::ingest_dir(store, dirname, filter)?;
    println!("Added {new_concepts} new concepts");
    Ok(())
}
