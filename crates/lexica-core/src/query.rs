//! Query engine: scan sentences for mentions of stored concepts.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::concept::NO_MATCH;
use crate::error::{ConceptError, ConceptResult};
use crate::stopwords;
use crate::store::{ConceptStore, StorageError};

/// A concept occurrence discovered in a sentence. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// The adjacent adjective, or `None` for a bare-root match.
    pub adjective: Option<String>,
    pub root: String,
}

impl Mention {
    pub fn bare(root: &str) -> Self {
        Self {
            adjective: None,
            root: root.to_string(),
        }
    }

    pub fn paired(adjective: &str, root: &str) -> Self {
        Self {
            adjective: Some(adjective.to_string()),
            root: root.to_string(),
        }
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(adjective) = &self.adjective {
            write!(f, "{} {}", title_case(adjective), title_case(&self.root))
        } else {
            write!(f, "{}", title_case(&self.root))
        }
    }
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a sentence into lowercase tokens, stripping only `.`, `?`, `!`
/// and `,`.
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .chars()
        .filter(|c| !matches!(c, '.' | '?' | '!' | ','))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Scan one sentence. Every token except the first is a candidate root;
/// stopwords are never candidate roots, but the preceding token is tested for
/// adjective membership regardless of its own stopword status.
fn scan<S: ConceptStore>(store: &S, sentence: &str) -> ConceptResult<BTreeSet<String>> {
    let tokens = tokenize(sentence);
    let mut found = BTreeSet::new();
    for r in 1..tokens.len() {
        let root = &tokens[r];
        if stopwords::is_stopword(root) {
            continue;
        }
        let Some(adjectives) = store.lookup(root)? else {
            continue;
        };
        debug!(%root, "root found");
        if adjectives.allows_bare() {
            found.insert(Mention::bare(root).to_string());
        }
        let adjective = &tokens[r - 1];
        if adjectives.contains(adjective) {
            found.insert(Mention::paired(adjective, root).to_string());
        }
    }
    if found.is_empty() {
        found.insert(NO_MATCH.to_string());
    }
    Ok(found)
}

/// Find all stored concepts mentioned in a sentence.
///
/// Returns the set of title-cased display strings, or `{"none"}` when the
/// sentence matches nothing. Querying an empty store is
/// [`ConceptError::EmptyStore`], distinct from a zero-match result.
pub fn find_mentions<S: ConceptStore>(
    store: &S,
    sentence: &str,
) -> ConceptResult<BTreeSet<String>> {
    ensure_populated(store)?;
    scan(store, sentence)
}

/// Union of [`find_mentions`] over multiple lines.
///
/// A real match anywhere supersedes `"none"` anywhere else. Empty input
/// yields `{"none"}`.
pub fn find_mentions_in_lines<S, I, L>(store: &S, lines: I) -> ConceptResult<BTreeSet<String>>
where
    S: ConceptStore,
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    ensure_populated(store)?;
    let mut all = BTreeSet::new();
    for line in lines {
        all.extend(scan(store, line.as_ref())?);
    }
    if all.len() > 1 {
        all.remove(NO_MATCH);
    }
    if all.is_empty() {
        all.insert(NO_MATCH.to_string());
    }
    Ok(all)
}

/// Scan every line of a sentence file.
///
/// Returns [`ConceptError::NotFound`] when the file does not exist.
pub fn query_file<S: ConceptStore>(store: &S, path: &Path) -> ConceptResult<BTreeSet<String>> {
    if !path.exists() {
        return Err(ConceptError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(StorageError::from)?;
    find_mentions_in_lines(store, text.lines())
}

fn ensure_populated<S: ConceptStore>(store: &S) -> ConceptResult<()> {
    if store.is_empty()? {
        return Err(ConceptError::EmptyStore);
    }
    Ok(())
}
