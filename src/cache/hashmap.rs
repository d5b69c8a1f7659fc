//! Index-to-term cache for the top-down strategy.
//!
//! Entries are only ever added: there is no `clear` and no removal, so a
//! term observed once stays valid for the lifetime of the owning evaluator.

use std::collections::HashMap;
use std::hash::Hash;

/// A grow-only cache backed by [HashMap].
///
/// Lookups through [`get`][Self::get] are counted as hits or misses.
/// [`peek`][Self::peek] reads without touching the counters.
#[derive(Debug)]
pub struct HashMapCache<K, V> {
    map: HashMap<K, V>,
    hits: usize,
    misses: usize,
}

impl<K, V> Default for HashMapCache<K, V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, V> HashMapCache<K, V> {
    /// Creates a new cache with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Returns the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses
    }
}

impl<K, V> HashMapCache<K, V>
where
    K: Hash + Eq,
    V: Copy + PartialEq,
{
    /// Looks up a key in the cache.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.map.get(key) {
            Some(v) => {
                self.hits += 1;
                Some(v)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Looks up a key without updating the statistics.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Returns true if the key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Inserts a key-value pair into the cache.
    ///
    /// Re-inserting an existing key must carry the same value.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) {
        let old = self.map.insert(key, value);
        debug_assert!(
            old.map_or(true, |old| old == value),
            "cache entries must never change"
        );
    }
}

impl<K, V> HashMapCache<K, V>
where
    K: Ord + Copy,
    V: Copy,
{
    /// Returns all entries sorted by key.
    pub fn entries(&self) -> Vec<(K, V)> {
        let mut entries: Vec<(K, V)> = self.map.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort_unstable_by_key(|&(k, _)| k);
        entries
    }
}
