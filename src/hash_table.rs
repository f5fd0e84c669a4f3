//! A fixed-bucket hash table with separate chaining.
//!
//! The bucket count never changes after construction, so a poor spread
//! simply grows the chains. It is one of the rank stores under comparison
//! and makes no attempt to compete with `std::collections::HashMap`.

use crate::{Error, Result};
use std::{fmt::Debug, hash::Hash};

// Fixed seeds keep bucket placement identical across runs of one build.
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

#[derive(Clone)]
pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    hasher: ahash::RandomState,
    len: usize,
}

impl<K, V> HashTable<K, V>
where
    K: Hash + Eq + Debug,
{
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "size={size}");
        let mut buckets = Vec::with_capacity(size);
        buckets.resize_with(size, Vec::new);
        Self {
            buckets,
            hasher: ahash::RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]),
            len: 0,
        }
    }

    fn bucket_of(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Overwrites the value of an existing key in place, otherwise appends to
    /// the key's bucket.
    pub fn set(&mut self, key: K, value: V) {
        let idx = self.bucket_of(&key);
        let bucket = &mut self.buckets[idx];
        if let Some((_, v)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            *v = value;
        } else {
            bucket.push((key, value));
            self.len += 1;
        }
    }

    pub fn get(&self, key: &K) -> Result<&V> {
        let idx = self.bucket_of(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| Error::KeyNotFound(format!("{key:?}")))
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        let idx = self.bucket_of(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| Error::KeyNotFound(format!("{key:?}")))
    }

    pub fn contains(&self, key: &K) -> bool {
        let idx = self.bucket_of(key);
        self.buckets[idx].iter().any(|(k, _)| k == key)
    }
}

impl<K, V> HashTable<K, V> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest chain.
    pub fn longest_bucket(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Keys, bucket by bucket.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.items().map(|(k, _)| k)
    }

    /// Entries, bucket by bucket, insertion order within a bucket.
    pub fn items(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    pub fn approx_bytes(&self) -> usize {
        let chains: usize = self
            .buckets
            .iter()
            .map(|bucket| bucket.capacity() * std::mem::size_of::<(K, V)>())
            .sum();
        std::mem::size_of::<Self>()
            + self.buckets.capacity() * std::mem::size_of::<Vec<(K, V)>>()
            + chains
    }
}

impl<K: Debug, V: Debug> Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.items()).finish()
    }
}
