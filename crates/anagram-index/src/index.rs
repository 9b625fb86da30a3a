// The built anagram index.

use anagram_core::{CanonicalKey, canonical_key};
use anagram_map::{Map, WordList};

use crate::backend::Backend;

/// Mapping from canonical key to anagram class, built once and read-only
/// afterwards.
///
/// Construct with [`AnagramIndex::build`] or an
/// [`IndexBuilder`](crate::IndexBuilder); query with
/// [`AnagramIndex::anagrams`].
#[derive(Debug)]
pub struct AnagramIndex {
    pub(crate) map: Box<dyn Map<CanonicalKey, WordList>>,
    pub(crate) backend: Backend,
    pub(crate) word_count: usize,
}

impl AnagramIndex {
    /// The raw class `word` belongs to, in insertion order, including
    /// `word` itself if it was indexed.
    pub fn class_of(&self, word: &str) -> Option<&WordList> {
        self.map.get(&canonical_key(word))
    }

    /// The class stored under `key`.
    pub fn class(&self, key: &CanonicalKey) -> Option<&WordList> {
        self.map.get(key)
    }

    /// Iterate over `(key, class)` pairs in backend order (sorted by key for
    /// the tree backends, unspecified for the hash backend).
    pub fn classes(&self) -> impl Iterator<Item = (&CanonicalKey, &WordList)> + '_ {
        self.map.iter()
    }

    /// Number of anagram classes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of distinct words stored across all classes.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }
}
