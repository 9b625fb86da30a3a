// Unbalanced binary search tree map.
//
// Dictionaries are often sorted, which turns this tree into a linked list.
// Insertion, lookup and drop are therefore iterative so that a degenerate
// tree cannot overflow the stack.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::{Map, MapError};

type Link<K, V> = Option<Box<BstNode<K, V>>>;

struct BstNode<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

/// An ordered map backed by a plain binary search tree.
pub struct BstMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord, V> BstMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    /// Insert `value` under `key`, returning the replaced value if the key
    /// was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            };
        }
        *link = Some(Box::new(BstNode {
            key,
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
        None
    }
}

impl<K, V> BstMap<K, V> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&BstNode<K, V>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max
    }

    /// In-order (ascending key) iteration.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<K, V> Drop for BstMap<K, V> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<BstNode<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> Map<K, V> for BstMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        BstMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        BstMap::get_mut(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        Ok(self.insert(key, value))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(BstMap::iter(self))
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BstMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// In-order iterator over a [`BstMap`].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a BstNode<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left(&mut self, mut cur: Option<&'a BstNode<K, V>>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree() {
        let map: BstMap<u32, u32> = BstMap::new();
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
        assert_eq!(map.get(&1), None);
    }

    #[test]
    fn shape_follows_insertion_order() {
        let mut map = BstMap::new();
        for k in [4, 2, 6, 1, 3, 5, 7] {
            map.insert(k, ());
        }
        assert_eq!(map.height(), 3);

        let mut chain = BstMap::new();
        for k in 1..=7 {
            chain.insert(k, ());
        }
        assert_eq!(chain.height(), 7);
    }

    #[test]
    fn iteration_is_sorted() {
        let mut map = BstMap::new();
        for k in ["opst", "aet", "art", "eilnst"] {
            map.insert(k, ());
        }
        let keys: Vec<&str> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["aet", "art", "eilnst", "opst"]);
    }

    #[test]
    fn replace_keeps_len() {
        let mut map = BstMap::new();
        assert_eq!(map.insert(1, "a"), None);
        assert_eq!(map.insert(1, "b"), Some("a"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"b"));
    }

    #[test]
    fn degenerate_tree_does_not_overflow() {
        let mut map = BstMap::new();
        for i in 0..10_000u32 {
            map.insert(i, i);
        }
        assert_eq!(map.len(), 10_000);
        assert_eq!(map.get(&9_999), Some(&9_999));
        assert_eq!(map.height(), 10_000);
        assert_eq!(map.iter().count(), 10_000);
        drop(map);
    }
}
