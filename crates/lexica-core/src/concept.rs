//! Concept record model and definition-line parsing.

use std::collections::BTreeSet;

use crate::error::ConceptError;

/// Adjective sentinel marking "the bare root is itself a concept".
pub const BARE_SENTINEL: &str = "_";

/// Display string reported when a sentence matches no stored concept.
pub const NO_MATCH: &str = "none";

/// Separator used when persisting an adjective set as a single column.
/// Tokens are whitespace-split words and can never contain it.
pub const ADJ_SEPARATOR: char = ',';

/// A parsed concept definition: one root noun plus at most one adjective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptDef {
    /// Qualifier token, or [`BARE_SENTINEL`] when the line had no adjective.
    pub adjective: String,
    /// Root noun; primary key of the stored record.
    pub root: String,
}

impl ConceptDef {
    /// Parse one concept-definition line.
    ///
    /// Lines are trimmed, lowercased, and split on single spaces. One token
    /// yields a bare-root definition, two yield an adjective-root pair, and
    /// more than two is a [`ConceptError::MalformedConcept`]. Blank or
    /// whitespace-only lines parse to `None` and are skipped by ingestion.
    pub fn parse(line: &str) -> Result<Option<Self>, ConceptError> {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            return Ok(None);
        }
        let tokens: Vec<&str> = line.split(' ').collect();
        match tokens.as_slice() {
            [root] => Ok(Some(Self {
                adjective: BARE_SENTINEL.to_string(),
                root: (*root).to_string(),
            })),
            [adjective, root] => Ok(Some(Self {
                adjective: (*adjective).to_string(),
                root: (*root).to_string(),
            })),
            _ => Err(ConceptError::MalformedConcept { line }),
        }
    }

    /// True when this definition marks the root alone as a concept.
    pub fn is_bare(&self) -> bool {
        self.adjective == BARE_SENTINEL
    }
}

/// The set of adjectives stored for one root.
///
/// Backed by a `BTreeSet` so the persisted `,`-joined form is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjectiveSet(BTreeSet<String>);

impl AdjectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding a single adjective (or the bare-root sentinel).
    pub fn single(adjective: &str) -> Self {
        let mut set = BTreeSet::new();
        set.insert(adjective.to_string());
        Self(set)
    }

    /// Insert an adjective; returns whether it was newly added.
    pub fn insert(&mut self, adjective: &str) -> bool {
        self.0.insert(adjective.to_string())
    }

    pub fn contains(&self, adjective: &str) -> bool {
        self.0.contains(adjective)
    }

    /// True when the set contains the [`BARE_SENTINEL`], i.e. the root on its
    /// own is a recognized concept.
    pub fn allows_bare(&self) -> bool {
        self.contains(BARE_SENTINEL)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Deserialize from the persisted `,`-joined column value.
    pub fn from_joined(joined: &str) -> Self {
        Self(
            joined
                .split(ADJ_SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Serialize to the `,`-joined column value.
    pub fn to_joined(&self) -> String {
        self.0
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(&ADJ_SEPARATOR.to_string())
    }
}

impl FromIterator<String> for AdjectiveSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
