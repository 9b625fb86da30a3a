// Separate-chaining hash table with load-factor driven resizing.
//
// The bucket count is always a power of two so a bucket is picked by
// masking the hash. When an insertion of a new key would push the load
// factor above 3/4, the table doubles and every entry is rehashed.

use std::fmt;
use std::hash::{BuildHasher, Hash};

use hashbrown::DefaultHashBuilder;

use crate::{Map, MapError};

/// Bucket count of a freshly created table.
pub const INITIAL_BUCKETS: usize = 16;

type Bucket<K, V> = Vec<(K, V)>;

fn empty_buckets<K, V>(count: usize) -> Vec<Bucket<K, V>> {
    (0..count).map(|_| Vec::new()).collect()
}

/// A hash map that resolves collisions by chaining entries in per-bucket
/// vectors.
pub struct ChainedHashMap<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Bucket<K, V>>,
    len: usize,
    hash_builder: S,
}

impl<K: Hash + Eq, V> ChainedHashMap<K, V, DefaultHashBuilder> {
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedHashMap<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            buckets: empty_buckets(INITIAL_BUCKETS),
            len: 0,
            hash_builder,
        }
    }

    fn bucket_index(&self, key: &K) -> usize {
        // Truncating the hash is fine, only the low bits are used
        (self.hash_builder.hash_one(key) as usize) & (self.buckets.len() - 1)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Insert `value` under `key`, returning the replaced value if the key
    /// was already present.
    ///
    /// Fails only when the table would have to grow past `usize::MAX`
    /// buckets.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        let idx = self.bucket_index(&key);
        if let Some((_, slot)) = self.buckets[idx].iter_mut().find(|(k, _)| *k == key) {
            return Ok(Some(std::mem::replace(slot, value)));
        }

        if self.len + 1 > self.threshold() {
            self.grow()?;
        }
        let idx = self.bucket_index(&key);
        self.buckets[idx].push((key, value));
        self.len += 1;
        Ok(None)
    }

    fn grow(&mut self) -> Result<(), MapError> {
        let current = self.buckets.len();
        let new_count = current
            .checked_mul(2)
            .ok_or(MapError::CapacityOverflow { buckets: current })?;

        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_count));
        for (key, value) in old.into_iter().flatten() {
            let idx = self.bucket_index(&key);
            self.buckets[idx].push((key, value));
        }
        Ok(())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Maximum number of entries before the next insertion of a new key
    /// grows the table.
    fn threshold(&self) -> usize {
        let n = self.buckets.len();
        n - n / 4
    }

    /// Iterate over all entries in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }
}

impl<K, V, S> Map<K, V> for ChainedHashMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn get(&self, key: &K) -> Option<&V> {
        ChainedHashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        ChainedHashMap::get_mut(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        self.insert(key, value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(ChainedHashMap::iter(self))
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::hash::BuildHasherDefault;
    use std::hash::DefaultHasher;

    use super::*;

    /// A hasher that sends every key to the same bucket.
    #[derive(Default)]
    struct ConstantHasher;

    impl std::hash::Hasher for ConstantHasher {
        fn finish(&self) -> u64 {
            0
        }
        fn write(&mut self, _bytes: &[u8]) {}
    }

    #[test]
    fn starts_with_initial_buckets() {
        let map: ChainedHashMap<String, u32> = ChainedHashMap::new();
        assert_eq!(map.bucket_count(), INITIAL_BUCKETS);
        assert!(map.is_empty());
    }

    #[test]
    fn grows_at_three_quarters_load() {
        let mut map = ChainedHashMap::new();
        for i in 0..12 {
            map.insert(i, i).unwrap();
        }
        assert_eq!(map.bucket_count(), 16);
        map.insert(12, 12).unwrap();
        assert_eq!(map.bucket_count(), 32);
        assert_eq!(map.len(), 13);
    }

    #[test]
    fn replacing_does_not_grow() {
        let mut map = ChainedHashMap::new();
        for i in 0..12 {
            map.insert(i, i).unwrap();
        }
        assert_eq!(map.insert(0, 100), Ok(Some(0)));
        assert_eq!(map.bucket_count(), 16);
        assert_eq!(map.len(), 12);
    }

    #[test]
    fn resize_keeps_every_entry() {
        let mut map = ChainedHashMap::new();
        for i in 0..5000 {
            map.insert(format!("w{i}"), i).unwrap();
        }
        assert_eq!(map.len(), 5000);
        assert!(map.bucket_count() >= 5000 * 4 / 3);
        for i in 0..5000 {
            assert_eq!(map.get(&format!("w{i}")), Some(&i));
        }
        assert_eq!(map.iter().count(), 5000);
    }

    #[test]
    fn collisions_chain_in_one_bucket() {
        let mut map: ChainedHashMap<&str, u32, BuildHasherDefault<ConstantHasher>> =
            ChainedHashMap::with_hasher(BuildHasherDefault::default());
        map.insert("art", 1).unwrap();
        map.insert("aet", 2).unwrap();
        map.insert("opst", 3).unwrap();
        assert_eq!(map.get(&"art"), Some(&1));
        assert_eq!(map.get(&"aet"), Some(&2));
        assert_eq!(map.get(&"opst"), Some(&3));
        assert_eq!(map.get(&"none"), None);
        assert_eq!(map.buckets[0].len(), 3);
    }

    #[test]
    fn custom_std_hasher() {
        let mut map: ChainedHashMap<u32, u32, BuildHasherDefault<DefaultHasher>> =
            ChainedHashMap::with_hasher(BuildHasherDefault::default());
        for i in 0..100 {
            map.insert(i, i * i).unwrap();
        }
        assert_eq!(map.get(&9), Some(&81));
    }
}
