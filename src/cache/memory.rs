//! Memory Cache Module
//!
//! The entry store alone behind a lock, for callers that never tag.

use std::sync::RwLock;
use std::time::Duration;

use tracing::info;

use crate::cache::stats::StatsRecorder;
use crate::cache::{Cache, CacheStats, Clock, EntryStore, SystemClock};
use crate::error::Result;

// == Memory Cache ==
/// Thread-safe key-value cache with TTL expiration and no tag index.
#[derive(Debug)]
pub struct MemoryCache<V, C = SystemClock> {
    store: RwLock<EntryStore<V>>,
    clock: C,
    stats: StatsRecorder,
}

impl<V: Clone> MemoryCache<V, SystemClock> {
    /// Creates an empty cache on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<V: Clone> Default for MemoryCache<V, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, C: Clock> MemoryCache<V, C> {
    /// Creates an empty cache driven by `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: RwLock::new(EntryStore::new()),
            clock,
            stats: StatsRecorder::default(),
        }
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> Result<CacheStats> {
        Ok(self.stats.snapshot(self.store.read()?.len(), 0))
    }

    /// Number of stored entries, expired ones not yet swept included.
    pub fn len(&self) -> Result<usize> {
        Ok(self.store.read()?.len())
    }

    /// Returns true if no entry is stored.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.store.read()?.is_empty())
    }
}

impl<V, C> Cache for MemoryCache<V, C>
where
    V: Clone + Send + Sync + 'static,
    C: Clock,
{
    type Value = V;

    fn get(&self, key: &str) -> Result<Option<V>> {
        let now = self.clock.now_ms();
        let value = self.store.read()?.get(key, now).cloned();
        self.stats.record_lookup(value.is_some());
        Ok(value)
    }

    fn set(&self, key: &str, value: V, ttl: Duration) -> Result<()> {
        let now = self.clock.now_ms();
        self.store.write()?.set(key, value, ttl, now);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.store.write()?.delete(key);
        Ok(())
    }

    fn is_hit(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    fn clear_expired(&self) -> Result<usize> {
        let now = self.clock.now_ms();
        let removed = self.store.write()?.clear_expired(now);
        self.stats.record_expired(removed);
        if removed > 0 {
            info!("Removed {} expired entries", removed);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::error::CacheError;
    use std::sync::Arc;

    #[test]
    fn test_memory_cache_roundtrip() {
        let cache: MemoryCache<String> = MemoryCache::new();

        cache.set("key1", "cache value".to_string(), Duration::ZERO).unwrap();
        assert_eq!(cache.get("key1").unwrap().as_deref(), Some("cache value"));

        cache.delete("key1").unwrap();
        assert!(cache.get("key1").unwrap().is_none());
    }

    #[test]
    fn test_memory_cache_expiry_and_sweep() {
        let clock = Arc::new(ManualClock::new(0));
        let cache = MemoryCache::with_clock(Arc::clone(&clock));

        cache.set("short", 1i64, Duration::from_secs(1)).unwrap();
        cache.set("forever", 2i64, Duration::ZERO).unwrap();
        clock.advance(Duration::from_secs(1));

        assert!(!cache.is_hit("short").unwrap());
        assert_eq!(cache.len().unwrap(), 2);
        assert_eq!(cache.clear_expired().unwrap(), 1);
        assert_eq!(cache.get("forever").unwrap(), Some(2));

        let stats = cache.stats().unwrap();
        assert_eq!(stats.expired_removed, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_memory_cache_any_key_round_trips() {
        let cache: MemoryCache<String> = MemoryCache::new();
        let long_key = "x".repeat(1024);

        cache.set("", "empty".to_string(), Duration::ZERO).unwrap();
        cache.set(&long_key, "long".to_string(), Duration::ZERO).unwrap();

        assert_eq!(cache.get("").unwrap().as_deref(), Some("empty"));
        assert_eq!(cache.get(&long_key).unwrap().as_deref(), Some("long"));
    }

    #[test]
    fn test_memory_cache_set_any_mismatch() {
        let cache: MemoryCache<String> = MemoryCache::new();

        let result = cache.set_any("key", Box::new(7u8), Duration::ZERO);
        assert!(matches!(
            result,
            Err(CacheError::TypeMismatch { expected }) if expected.contains("String")
        ));
        assert!(cache.is_empty().unwrap());
    }
}
