// Map backend selection.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use anagram_map::{AvlTreeMap, BstMap, ChainedHashMap, Map};

use crate::IndexError;

/// Which map implementation stores the index.
///
/// The choice affects only performance and internal structure; query
/// results are identical for every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// Self-balancing AVL tree.
    #[default]
    Avl,
    /// Unbalanced binary search tree.
    Bst,
    /// Separate-chaining hash table.
    Hash,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Avl, Backend::Bst, Backend::Hash];

    /// The name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Backend::Avl => "avl",
            Backend::Bst => "bst",
            Backend::Hash => "hash",
        }
    }

    /// Create an empty map of this kind.
    pub fn new_map<K, V>(self) -> Box<dyn Map<K, V>>
    where
        K: Ord + Hash + fmt::Debug + 'static,
        V: fmt::Debug + 'static,
    {
        match self {
            Backend::Avl => Box::new(AvlTreeMap::new()),
            Backend::Bst => Box::new(BstMap::new()),
            Backend::Hash => Box::new(ChainedHashMap::new()),
        }
    }
}

impl FromStr for Backend {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avl" => Ok(Backend::Avl),
            "bst" => Ok(Backend::Bst),
            "hash" => Ok(Backend::Hash),
            other => Err(IndexError::InvalidBackend(other.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
