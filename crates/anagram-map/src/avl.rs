// Self-balancing AVL tree map.
//
// Every node stores the height of its subtree. After each insertion the
// path back to the root is rebalanced so that the heights of any node's two
// subtrees differ by at most one.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::{Map, MapError};

type Link<K, V> = Option<Box<AvlNode<K, V>>>;

struct AvlNode<K, V> {
    key: K,
    value: V,
    height: u32,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> AvlNode<K, V> {
    fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        })
    }
}

fn height<K, V>(link: &Link<K, V>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

fn update_height<K, V>(node: &mut AvlNode<K, V>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

/// Left height minus right height.
fn balance_factor<K, V>(node: &AvlNode<K, V>) -> i64 {
    i64::from(height(&node.left)) - i64::from(height(&node.right))
}

fn rotate_right<K, V>(mut node: Box<AvlNode<K, V>>) -> Box<AvlNode<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    update_height(&mut node);
    pivot.right = Some(node);
    update_height(&mut pivot);
    pivot
}

fn rotate_left<K, V>(mut node: Box<AvlNode<K, V>>) -> Box<AvlNode<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    update_height(&mut node);
    pivot.left = Some(node);
    update_height(&mut pivot);
    pivot
}

fn rebalance<K, V>(mut node: Box<AvlNode<K, V>>) -> Box<AvlNode<K, V>> {
    update_height(&mut node);
    let bf = balance_factor(&node);
    if bf > 1 {
        // Left-right case
        if node.left.as_ref().is_some_and(|l| balance_factor(l) < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if bf < -1 {
        // Right-left case
        if node.right.as_ref().is_some_and(|r| balance_factor(r) > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Insert below `link`, returning the new subtree root.
///
/// `replaced` receives the old value when `key` was already present; in that
/// case the tree shape is unchanged.
fn insert_node<K: Ord, V>(
    link: Link<K, V>,
    key: K,
    value: V,
    replaced: &mut Option<V>,
) -> Box<AvlNode<K, V>> {
    let Some(mut node) = link else {
        return AvlNode::leaf(key, value);
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), key, value, replaced)),
        Ordering::Greater => {
            node.right = Some(insert_node(node.right.take(), key, value, replaced))
        }
        Ordering::Equal => {
            *replaced = Some(mem::replace(&mut node.value, value));
            return node;
        }
    }
    rebalance(node)
}

/// An ordered map backed by an AVL tree.
pub struct AvlTreeMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord, V> AvlTreeMap<K, V> {
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
        let mut replaced = None;
        self.root = Some(insert_node(self.root.take(), key, value, &mut replaced));
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }
}

impl<K, V> AvlTreeMap<K, V> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// In-order (ascending key) iteration.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> Map<K, V> for AvlTreeMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        AvlTreeMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        AvlTreeMap::get_mut(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        Ok(self.insert(key, value))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(AvlTreeMap::iter(self))
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// In-order iterator over an [`AvlTreeMap`].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a AvlNode<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left(&mut self, mut cur: Option<&'a AvlNode<K, V>>) {
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

    /// Check the AVL invariant and stored heights; returns the subtree height.
    fn check_balanced<K, V>(link: &Link<K, V>) -> u32 {
        let Some(node) = link else {
            return 0;
        };
        let lh = check_balanced(&node.left);
        let rh = check_balanced(&node.right);
        assert!(lh.abs_diff(rh) <= 1, "unbalanced node: {lh} vs {rh}");
        assert_eq!(node.height, 1 + lh.max(rh));
        node.height
    }

    #[test]
    fn empty_tree() {
        let map: AvlTreeMap<String, i32> = AvlTreeMap::new();
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
        assert_eq!(map.get(&"x".to_string()), None);
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let mut map = AvlTreeMap::new();
        for i in 0..1024 {
            map.insert(i, i * 2);
        }
        check_balanced(&map.root);
        assert_eq!(map.len(), 1024);
        // A perfectly balanced tree of 1024 nodes has height 11
        assert!(map.height() <= 12, "height {}", map.height());
    }

    #[test]
    fn descending_inserts_stay_balanced() {
        let mut map = AvlTreeMap::new();
        for i in (0..500).rev() {
            map.insert(i, ());
        }
        check_balanced(&map.root);
        assert_eq!(map.len(), 500);
    }

    #[test]
    fn zigzag_inserts_trigger_double_rotations() {
        let mut map = AvlTreeMap::new();
        for k in [50, 20, 30, 80, 60, 70, 10, 15, 12] {
            map.insert(k, k);
            check_balanced(&map.root);
        }
        let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, [10, 12, 15, 20, 30, 50, 60, 70, 80]);
    }

    #[test]
    fn iteration_is_sorted() {
        let mut map = AvlTreeMap::new();
        for w in ["tea", "art", "opst", "aet", "eilnst"] {
            map.insert(w.to_string(), w.len());
        }
        let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["aet", "art", "eilnst", "opst", "tea"]);
    }

    #[test]
    fn replace_keeps_len() {
        let mut map = AvlTreeMap::new();
        assert_eq!(map.insert("k", 1), None);
        assert_eq!(map.insert("k", 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"k"), Some(&2));
    }

    #[test]
    fn get_mut_reaches_deep_nodes() {
        let mut map = AvlTreeMap::new();
        for i in 0..64 {
            map.insert(i, 0);
        }
        for i in 0..64 {
            *map.get_mut(&i).unwrap() = i;
        }
        assert!(map.iter().all(|(k, v)| k == v));
    }
}
