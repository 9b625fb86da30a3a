//! Anagram index construction and lookup.
//!
//! Words are grouped into anagram classes by their canonical key (the
//! lowercase, character-sorted form of the word). The index maps each key
//! to the distinct words sharing it; queries return a word's class without
//! the word itself, sorted lexicographically.
//!
//! # Architecture
//!
//! - [`backend`] -- Runtime selection of the map implementation
//! - [`options`] -- Build options (backend, duplicate policy)
//! - [`builder`] -- Per-word insertion with duplicate suppression
//! - [`index`] -- The built, read-only index
//! - [`query`] -- Anagram retrieval (self-exclusion, sorting)
//! - [`source`] -- Dictionary file reading
//! - [`finder`] -- One-shot facade: load a dictionary, answer queries
//!
//! # Example
//!
//! ```
//! use anagram_index::{Anagrams, Backend, build_index, query_anagrams};
//!
//! let index = build_index(["rat", "tar", "art", "dog"], Backend::Hash).unwrap();
//! assert_eq!(
//!     query_anagrams(&index, "rat"),
//!     Anagrams::Found(vec!["art".to_string(), "tar".to_string()])
//! );
//! assert_eq!(query_anagrams(&index, "dog"), Anagrams::NoAnagrams);
//! ```

use std::path::PathBuf;

pub mod backend;
pub mod builder;
pub mod finder;
pub mod index;
pub mod options;
pub mod query;
pub mod source;

pub use anagram_core::{CanonicalKey, canonical_key};
pub use anagram_map::{MapError, WordList};
pub use backend::Backend;
pub use builder::{IndexBuilder, Insertion};
pub use finder::AnagramFinder;
pub use index::AnagramIndex;
pub use options::{DuplicatePolicy, IndexOptions};
pub use query::Anagrams;
pub use source::{read_words, read_words_from};

/// Error type for index construction and configuration.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The dictionary file could not be opened or read.
    #[error("an I/O error occurred reading '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backend name is not one of `avl`, `bst`, `hash`.
    #[error("invalid data structure '{0}' received")]
    InvalidBackend(String),

    /// The map backend failed while inserting.
    #[error(transparent)]
    Map(#[from] MapError),
}

/// Build an index over `words` with the given backend and default options.
pub fn build_index<I, S>(words: I, backend: Backend) -> Result<AnagramIndex, IndexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    AnagramIndex::build(words, IndexOptions::new(backend))
}

/// Look up the anagrams of `word` in `index`.
pub fn query_anagrams(index: &AnagramIndex, word: &str) -> Anagrams {
    index.anagrams(word)
}
