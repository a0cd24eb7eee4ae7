//! `query_input` and `query_input_file` subcommands.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;

use lexica_core::{query, ConceptError, ConceptStore};

/// Scan a sentence and print the comma-joined match set.
pub fn query_input<S: ConceptStore>(store: &S, sent: &str) -> Result<()> {
    report(query::find_mentions(store, sent))
}

/// Scan each line of a file and print the comma-joined match set.
pub fn query_input_file<S: ConceptStore>(store: &S, fname: &Path) -> Result<()> {
    report(query::query_file(store, fname))
}

fn report(result: Result<BTreeSet<String>, ConceptError>) -> Result<()> {
    match result {
        Ok(mentions) => {
            let joined = mentions.into_iter().collect::<Vec<_>>().join(", ");
            println!("Matches: {joined}");
            Ok(())
        }
        Err(ConceptError::EmptyStore) => {
            println!("No concepts added, cannot query");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
