// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Memo table for one pure chart derivation, keyed by its inputs.
///
/// Holds at most `capacity` entries; the oldest insertion goes first.
#[derive(Debug, Clone)]
pub struct ChartCache<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
    misses: u64,
}

impl<K, V> Default for ChartCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: DEFAULT_CACHE_CAPACITY,
            misses: 0,
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone> ChartCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            ..Self::default()
        }
    }

    pub fn get_or_try_insert_with<E, F>(&mut self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(v) = self.entries.get(&key) {
            return Ok(v.clone());
        }
        self.misses += 1;
        let value = compute()?;
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value.clone());
        Ok(value)
    }

    pub fn get_or_insert_with<F>(&mut self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self.get_or_try_insert_with(key, || Ok::<V, std::convert::Infallible>(compute())) {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }

    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of times a value had to be computed.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_once_per_key() {
        let mut cache = ChartCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            let v = cache.get_or_insert_with((1u64, "a"), || {
                calls += 1;
                42
            });
            assert_eq!(v, 42);
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.misses(), 1);

        cache.get_or_insert_with((2u64, "a"), || 7);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn distinct_keys_never_share_a_value() {
        let mut cache = ChartCache::new();
        for i in 0..DEFAULT_CACHE_CAPACITY as u64 {
            cache.get_or_insert_with(i, || i * 10);
        }
        for i in 0..DEFAULT_CACHE_CAPACITY as u64 {
            assert_eq!(cache.get_or_insert_with(i, || u64::MAX), i * 10);
        }
        assert_eq!(cache.misses(), DEFAULT_CACHE_CAPACITY as u64);
    }

    #[test]
    fn oldest_entry_is_evicted_at_capacity() {
        let mut cache = ChartCache::with_capacity(2);
        cache.get_or_insert_with("a", || 1);
        cache.get_or_insert_with("b", || 2);
        cache.get_or_insert_with("c", || 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_or_insert_with("b", || 0), 2);
        assert_eq!(cache.get_or_insert_with("a", || 9), 9);
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn failed_computation_is_not_cached() {
        let mut cache: ChartCache<u8, i32> = ChartCache::new();
        let err: Result<i32, &str> = cache.get_or_try_insert_with(1, || Err("boom"));
        assert!(err.is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_try_insert_with(1, || Ok::<_, &str>(3)), Ok(3));
    }

    #[test]
    fn invalidate_forces_recompute() {
        let mut cache = ChartCache::new();
        cache.get_or_insert_with("k", || 1);
        cache.invalidate();
        assert_eq!(cache.get_or_insert_with("k", || 2), 2);
        assert_eq!(cache.misses(), 2);
    }
}
