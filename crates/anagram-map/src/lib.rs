//! Map backends for the anagram index.
//!
//! The index only depends on the [`Map`] trait, so the concrete backend is
//! chosen at runtime without the indexing logic knowing which one is active.
//!
//! # Architecture
//!
//! - [`avl`] -- Self-balancing AVL tree, in-order iteration
//! - [`bst`] -- Unbalanced binary search tree, in-order iteration
//! - [`hash`] -- Separate-chaining hash table that doubles on load
//! - [`list`] -- `WordList`, the insertion-ordered value type of an anagram class

use std::fmt;

pub mod avl;
pub mod bst;
pub mod hash;
pub mod list;

pub use avl::AvlTreeMap;
pub use bst::BstMap;
pub use hash::ChainedHashMap;
pub use list::WordList;

/// Error type for map backend failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map capacity overflow: cannot grow beyond {buckets} buckets")]
    CapacityOverflow { buckets: usize },
}

/// Key-to-value mapping with unique keys.
///
/// `put` has last-write-wins semantics: storing a value under an existing
/// key replaces the old value, which is returned.
pub trait Map<K, V>: fmt::Debug {
    /// Look up the value stored under `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Look up the value stored under `key` for in-place modification.
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Store `value` under `key`, returning the previous value if any.
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError>;

    /// Number of distinct keys.
    fn len(&self) -> usize;

    /// Iterate over all entries. Order depends on the backend.
    fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backends() -> Vec<Box<dyn Map<String, u32>>> {
        vec![
            Box::new(AvlTreeMap::new()),
            Box::new(BstMap::new()),
            Box::new(ChainedHashMap::new()),
        ]
    }

    #[test]
    fn put_then_get() {
        for mut map in backends() {
            assert!(map.is_empty());
            assert_eq!(map.put("b".to_string(), 2), Ok(None));
            assert_eq!(map.put("a".to_string(), 1), Ok(None));
            assert_eq!(map.get(&"a".to_string()), Some(&1));
            assert_eq!(map.get(&"b".to_string()), Some(&2));
            assert_eq!(map.get(&"c".to_string()), None);
            assert_eq!(map.len(), 2);
        }
    }

    #[test]
    fn put_is_last_write_wins() {
        for mut map in backends() {
            map.put("k".to_string(), 1).unwrap();
            assert_eq!(map.put("k".to_string(), 5), Ok(Some(1)));
            assert_eq!(map.get(&"k".to_string()), Some(&5));
            assert_eq!(map.len(), 1);
        }
    }

    #[test]
    fn get_mut_updates_in_place() {
        for mut map in backends() {
            map.put("k".to_string(), 1).unwrap();
            if let Some(v) = map.get_mut(&"k".to_string()) {
                *v += 10;
            }
            assert_eq!(map.get(&"k".to_string()), Some(&11));
            assert!(map.get_mut(&"missing".to_string()).is_none());
        }
    }

    #[test]
    fn iter_visits_every_entry() {
        for mut map in backends() {
            for i in 0..100u32 {
                map.put(format!("key{i}"), i).unwrap();
            }
            let mut seen: Vec<u32> = map.iter().map(|(_, v)| *v).collect();
            seen.sort_unstable();
            assert_eq!(seen, (0..100).collect::<Vec<_>>());
            assert!(map.contains_key(&"key42".to_string()));
        }
    }
}
