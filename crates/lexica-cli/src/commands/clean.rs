//! `clean` subcommand.

use anyhow::Result;

use lexica_core::ConceptStore;

/// Remove every stored concept and report whether anything was removed.
pub fn clean<S: ConceptStore>(store: &S) -> Result<()> {
    if store.clear()? {
        println!("Database cleaned");
    } else {
        println!("Nothing to clean");
    }
    Ok(())
}
