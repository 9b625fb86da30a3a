// Canonical anagram keys: the lowercase, character-sorted form of a word.

use std::fmt;

use crate::character::fold_lowercase;
use crate::sort::insertion_sort;

/// The anagram-class key of a word.
///
/// Two words are anagrams of each other (ignoring case) exactly when their
/// keys are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the canonical key of `word`.
///
/// Every character is folded to lowercase, then the characters are sorted
/// by code point. Total over all strings; the empty word gives the empty key.
pub fn canonical_key(word: &str) -> CanonicalKey {
    let mut chars: Vec<char> = fold_lowercase(word).chars().collect();
    insertion_sort(&mut chars);
    CanonicalKey(chars.into_iter().collect())
}
