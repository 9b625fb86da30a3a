// AnagramFinder: load a dictionary once, then answer anagram queries.

use std::path::Path;

use crate::IndexError;
use crate::index::AnagramIndex;
use crate::options::IndexOptions;
use crate::query::Anagrams;
use crate::source::read_words;

/// Owns a built [`AnagramIndex`] and answers queries against it.
#[derive(Debug)]
pub struct AnagramFinder {
    index: AnagramIndex,
}

impl AnagramFinder {
    /// Read the dictionary at `path` (one word per line) and index it.
    pub fn from_file(path: impl AsRef<Path>, options: IndexOptions) -> Result<Self, IndexError> {
        let words = read_words(path)?;
        Self::from_words(words, options)
    }

    pub fn from_words<I, S>(words: I, options: IndexOptions) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            index: AnagramIndex::build(words, options)?,
        })
    }

    pub fn anagrams(&self, word: &str) -> Anagrams {
        self.index.anagrams(word)
    }

    pub fn index(&self) -> &AnagramIndex {
        &self.index
    }
}
