//! Concept ingestion: parse definition lines and merge them into a store.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::concept::ConceptDef;
use crate::error::{ConceptError, ConceptResult};
use crate::store::{ConceptStore, StorageError};

/// Ingest concept-definition lines, returning the number of newly-added
/// concepts (new roots plus new adjectives on existing roots).
///
/// Blank lines are skipped. A line with more than two tokens aborts the whole
/// batch with [`ConceptError::MalformedConcept`]; nothing ingested before the
/// bad line is rolled back.
pub fn ingest_lines<S, I, L>(store: &S, lines: I) -> ConceptResult<usize>
where
    S: ConceptStore,
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut new_concepts = 0;
    for line in lines {
        let Some(def) = ConceptDef::parse(line.as_ref())? else {
            continue;
        };
        if store.upsert(&def.root, &def.adjective)? {
            debug!(root = %def.root, adjective = %def.adjective, "added concept");
            new_concepts += 1;
        } else {
            debug!(root = %def.root, adjective = %def.adjective, "concept already stored");
        }
    }
    Ok(new_concepts)
}

/// Ingest one concept-definition file.
///
/// Returns [`ConceptError::NotFound`] when the file does not exist.
pub fn ingest_file<S: ConceptStore>(store: &S, path: &Path) -> ConceptResult<usize> {
    if !path.exists() {
        return Err(ConceptError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(StorageError::from)?;
    let new_concepts = ingest_lines(store, text.lines())?;
    info!(path = %path.display(), new = new_concepts, "ingested concept file");
    Ok(new_concepts)
}

/// Predicate selecting which directory entries count as concept files.
///
/// An explicit substring match on the file name. The default substring is
/// `"concepts"`; the CLI config can override it.
#[derive(Debug, Clone)]
pub struct ConceptFileFilter {
    substring: String,
}

impl ConceptFileFilter {
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.contains(&self.substring)
    }
}

impl Default for ConceptFileFilter {
    fn default() -> Self {
        Self::new("concepts")
    }
}

/// Ingest every matching file directly inside `dir` (no recursion), summing
/// per-file counts.
///
/// A file that disappears between listing and reading is logged and skipped
/// with zero contribution; a malformed line aborts the whole batch. A missing
/// directory is [`ConceptError::NotFound`].
pub fn ingest_dir<S: ConceptStore>(
    store: &S,
    dir: &Path,
    filter: &ConceptFileFilter,
) -> ConceptResult<usize> {
    if !dir.is_dir() {
        return Err(ConceptError::NotFound(dir.to_path_buf()));
    }
    let mut total = 0;
    for entry in fs::read_dir(dir).map_err(StorageError::from)? {
        let entry = entry.map_err(StorageError::from)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !filter.matches(name) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match ingest_file(store, &path) {
            Ok(n) => total += n,
            Err(ConceptError::NotFound(p)) => {
                warn!(path = %p.display(), "concept file vanished, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    info!(dir = %dir.display(), new = total, "ingested concept directory");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryConceptStore;
    use std::io::Write;

    #[test]
    fn ingest_counts_new_concepts_only() {
        let store = MemoryConceptStore::new();
        let added = ingest_lines(&store, ["red car", "blue car", "car"]).unwrap();
        assert_eq!(added, 3);

        let set = store.lookup("car").unwrap().unwrap();
        assert!(set.contains("red"));
        assert!(set.contains("blue"));
        assert!(set.allows_bare());
    }

    #[test]
    fn repeated_ingestion_adds_nothing() {
        let store = MemoryConceptStore::new();
        assert_eq!(ingest_lines(&store, ["red car"]).unwrap(), 1);
        assert_eq!(ingest_lines(&store, ["red car"]).unwrap(), 0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let store = MemoryConceptStore::new();
        let added = ingest_lines(&store, ["", "   ", "car"]).unwrap();
        assert_eq!(added, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn malformed_line_aborts_the_batch() {
        let store = MemoryConceptStore::new();
        let err = ingest_lines(&store, ["red car", "big red car", "bus"]).unwrap_err();
        assert!(matches!(err, ConceptError::MalformedConcept { .. }));
        // Lines before the malformed one were already applied.
        assert!(store.lookup("car").unwrap().is_some());
        assert!(store.lookup("bus").unwrap().is_none());
    }

    #[test]
    fn ingest_file_reports_missing_path() {
        let store = MemoryConceptStore::new();
        let err = ingest_file(&store, Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, ConceptError::NotFound(_)));
    }

    #[test]
    fn ingest_dir_only_reads_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut f1 = std::fs::File::create(dir.path().join("animal_concepts.txt")).unwrap();
        writeln!(f1, "red fox\nbear").unwrap();
        let mut f2 = std::fs::File::create(dir.path().join("notes.txt")).unwrap();
        writeln!(f2, "green tractor").unwrap();

        let store = MemoryConceptStore::new();
        let added = ingest_dir(&store, dir.path(), &ConceptFileFilter::default()).unwrap();
        assert_eq!(added, 2);
        assert!(store.lookup("tractor").unwrap().is_none());
    }

    #[test]
    fn ingest_dir_reports_missing_directory() {
        let store = MemoryConceptStore::new();
        let err =
            ingest_dir(&store, Path::new("/no/such/dir"), &ConceptFileFilter::default())
                .unwrap_err();
        assert!(matches!(err, ConceptError::NotFound(_)));
    }

    #[test]
    fn custom_filter_substring() {
        let filter = ConceptFileFilter::new("vocab");
        assert!(filter.matches("my_vocab.txt"));
        assert!(!filter.matches("concepts1.txt"));
    }
}
