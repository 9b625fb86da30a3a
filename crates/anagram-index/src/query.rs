// Anagram retrieval: look up the class, drop the query word, sort.

use anagram_core::{canonical_key, insertion_sort_by};

use crate::index::AnagramIndex;

/// Result of an anagram query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anagrams {
    /// The anagrams of the query word, sorted lexicographically
    /// (case-sensitive, by code point). Never empty.
    Found(Vec<String>),
    /// The word has no anagrams in the index.
    NoAnagrams,
}

impl Anagrams {
    pub fn is_found(&self) -> bool {
        matches!(self, Anagrams::Found(_))
    }

    /// The found words; empty for [`Anagrams::NoAnagrams`].
    pub fn words(&self) -> &[String] {
        match self {
            Anagrams::Found(words) => words,
            Anagrams::NoAnagrams => &[],
        }
    }

    pub fn into_words(self) -> Vec<String> {
        match self {
            Anagrams::Found(words) => words,
            Anagrams::NoAnagrams => Vec::new(),
        }
    }
}

impl AnagramIndex {
    /// Find the anagrams of `word`.
    ///
    /// Every class member exactly equal to `word` (case-sensitive) is
    /// excluded; the rest are sorted. A missing class, an empty class, or a
    /// class with nothing left after exclusion all give
    /// [`Anagrams::NoAnagrams`].
    pub fn anagrams(&self, word: &str) -> Anagrams {
        let Some(class) = self.class(&canonical_key(word)) else {
            return Anagrams::NoAnagrams;
        };
        if class.is_empty() || (class.len() == 1 && class.get(0) == Some(word)) {
            return Anagrams::NoAnagrams;
        }

        let mut found: Vec<String> = class
            .as_slice()
            .iter()
            .filter(|member| member.as_str() != word)
            .cloned()
            .collect();
        if found.is_empty() {
            return Anagrams::NoAnagrams;
        }

        insertion_sort_by(&mut found, |a, b| a.cmp(b));
        Anagrams::Found(found)
    }
}
