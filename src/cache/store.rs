//! Entry Store Module
//!
//! Flat key-value storage with lazy TTL expiration. The store itself is not
//! synchronized; the cache types wrap it in a lock and feed it the clock.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Entry Store ==
/// Key-value storage with per-entry expiration.
///
/// Any string is a valid key, the empty string included.
#[derive(Debug)]
pub struct EntryStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> Default for EntryStore<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V: Clone> EntryStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a value, replacing any prior entry for `key`.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Time to live; `Duration::ZERO` never expires
    /// * `now_ms` - Current Unix timestamp in milliseconds
    pub fn set(&mut self, key: &str, value: V, ttl: Duration, now_ms: u64) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl, now_ms));
    }

    // == Get ==
    /// Returns the value if present and not expired at `now_ms`.
    ///
    /// Expired entries are left in place for `clear_expired` to collect.
    pub fn get(&self, key: &str, now_ms: u64) -> Option<&V> {
        self.entry(key, now_ms).map(|entry| &entry.value)
    }

    // == Entry ==
    /// Returns the live entry with its metadata.
    pub fn entry(&self, key: &str, now_ms: u64) -> Option<&CacheEntry<V>> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now_ms))
    }

    // == Is Hit ==
    /// True iff `get` would return a value.
    pub fn is_hit(&self, key: &str, now_ms: u64) -> bool {
        self.get(key, now_ms).is_some()
    }

    // == Delete ==
    /// Removes an entry by key. Missing keys are ignored.
    ///
    /// Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear Expired ==
    /// Removes all entries expired at `now_ms`.
    ///
    /// Returns the number of entries removed.
    pub fn clear_expired(&mut self, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now_ms));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
