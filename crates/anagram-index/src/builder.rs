// Index construction: per-word keyed insertion with duplicate suppression.

use anagram_core::{CanonicalKey, canonical_key};
use anagram_map::{Map, WordList};
use tracing::{debug, trace};

use crate::IndexError;
use crate::index::AnagramIndex;
use crate::options::{DuplicatePolicy, IndexOptions};

/// Outcome of inserting one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The word started a new anagram class.
    NewClass,
    /// The word joined an existing class.
    Appended,
    /// The exact word was already in its class; nothing was stored.
    Duplicate,
}

/// Incrementally builds an [`AnagramIndex`].
///
/// Insertion is only possible while building; [`IndexBuilder::finish`]
/// hands out the read-only index.
#[derive(Debug)]
pub struct IndexBuilder {
    map: Box<dyn Map<CanonicalKey, WordList>>,
    options: IndexOptions,
    word_count: usize,
    duplicates: usize,
}

impl IndexBuilder {
    pub fn new(options: IndexOptions) -> Self {
        Self::with_map(options.backend.new_map(), options)
    }

    /// Build into a caller-supplied map instead of the one `options.backend`
    /// would create.
    pub(crate) fn with_map(
        map: Box<dyn Map<CanonicalKey, WordList>>,
        options: IndexOptions,
    ) -> Self {
        Self {
            map,
            options,
            word_count: 0,
            duplicates: 0,
        }
    }

    /// Insert a single word under its canonical key.
    ///
    /// The key is computed from the case-folded word, while the stored word
    /// keeps its original casing. Duplicate detection is exact and
    /// case-sensitive, so "Rat" and "rat" are distinct members of one class.
    ///
    /// Backend failures are returned unchanged; the builder does not retry.
    pub fn insert(&mut self, word: &str) -> Result<Insertion, IndexError> {
        let key = canonical_key(word);

        if let Some(class) = self.map.get_mut(&key) {
            if class.contains(word) {
                self.duplicates += 1;
                trace!(word, key = %key, "duplicate word skipped");
                return Ok(Insertion::Duplicate);
            }
            class.push(word);
            self.word_count += 1;
            trace!(word, key = %key, size = class.len(), "word appended to class");
            return Ok(Insertion::Appended);
        }

        trace!(word, key = %key, "new anagram class");
        let mut class = WordList::new();
        class.push(word);
        self.map.put(key, class)?;
        self.word_count += 1;
        Ok(Insertion::NewClass)
    }

    /// Insert every word from `words` in order, applying the duplicate
    /// policy. Exhausting the iterator ends the input.
    ///
    /// Returns the number of words consumed from the iterator, including
    /// skipped duplicates.
    pub fn extend<I, S>(&mut self, words: I) -> Result<usize, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut consumed = 0;
        for word in words {
            consumed += 1;
            let word = word.as_ref();
            if self.insert(word)? == Insertion::Duplicate
                && self.options.duplicate_policy == DuplicatePolicy::StopBuild
            {
                debug!(word, consumed, "duplicate word stops the build");
                break;
            }
        }
        Ok(consumed)
    }

    /// Number of duplicate words seen so far.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn finish(self) -> AnagramIndex {
        debug!(
            backend = %self.options.backend,
            classes = self.map.len(),
            words = self.word_count,
            duplicates = self.duplicates,
            "anagram index built"
        );
        AnagramIndex {
            map: self.map,
            backend: self.options.backend,
            word_count: self.word_count,
        }
    }
}

impl AnagramIndex {
    /// Build an index over `words`.
    pub fn build<I, S>(words: I, options: IndexOptions) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::new(options);
        builder.extend(words)?;
        Ok(builder.finish())
    }
}
