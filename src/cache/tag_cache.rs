//! Tag Cache Module
//!
//! Thread-safe cache combining the entry store and the tag index behind one
//! lock, so a tagged write or a tag deletion is never observed half-applied.

use std::sync::RwLock;
use std::time::Duration;

use tracing::{debug, info};

use crate::cache::stats::StatsRecorder;
use crate::cache::{Cache, CacheStats, Clock, EntryStore, SystemClock, TagIndex, TaggedCache};
use crate::error::Result;

/// Entry store and tag index, always locked together.
#[derive(Debug)]
struct TagCacheInner<V> {
    store: EntryStore<V>,
    tags: TagIndex,
}

// == Tag Cache ==
/// In-memory cache with TTL expiration and tag-based invalidation.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use tag_cache::{Cache, TagCache, TaggedCache};
///
/// let cache: TagCache<String> = TagCache::new();
/// cache.set_with_tag("k1", "t1", "a".to_string(), Duration::ZERO).unwrap();
/// cache.set_with_tag("k2", "t1", "b".to_string(), Duration::ZERO).unwrap();
/// assert_eq!(cache.get_keys("t1").unwrap().len(), 2);
///
/// cache.delete_with_tag("t1").unwrap();
/// assert!(cache.get("k1").unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct TagCache<V, C = SystemClock> {
    inner: RwLock<TagCacheInner<V>>,
    clock: C,
    stats: StatsRecorder,
}

impl<V: Clone> TagCache<V, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<V: Clone> Default for TagCache<V, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, C: Clock> TagCache<V, C> {
    /// Creates an empty cache driven by `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            inner: RwLock::new(TagCacheInner {
                store: EntryStore::new(),
                tags: TagIndex::new(),
            }),
            clock,
            stats: StatsRecorder::default(),
        }
    }

    // == Time To Live ==
    /// Remaining lifetime of a live key.
    ///
    /// `Ok(None)` covers both a missing key and a key that never expires;
    /// use `is_hit` to tell them apart.
    pub fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        let now = self.clock.now_ms();
        let inner = self.inner.read()?;
        Ok(inner
            .store
            .entry(key, now)
            .and_then(|entry| entry.ttl_remaining_ms(now))
            .map(Duration::from_millis))
    }

    // == Get Tagged ==
    /// Returns the member keys of `tag` paired with their live values.
    ///
    /// Keys and values are read under one lock, so the pairs reflect a single
    /// point in time. Dead members pair with `None`.
    pub fn get_tagged(&self, tag: &str) -> Result<Vec<(String, Option<V>)>> {
        let now = self.clock.now_ms();
        let inner = self.inner.read()?;
        Ok(inner
            .tags
            .keys(tag)
            .into_iter()
            .map(|key| {
                let value = inner.store.get(&key, now).cloned();
                (key, value)
            })
            .collect())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> Result<CacheStats> {
        let inner = self.inner.read()?;
        Ok(self.stats.snapshot(inner.store.len(), inner.tags.len()))
    }

    // == Length ==
    /// Number of stored entries, expired ones not yet swept included.
    pub fn len(&self) -> Result<usize> {
        Ok(self.inner.read()?.store.len())
    }

    /// Returns true if no entry is stored.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.inner.read()?.store.is_empty())
    }

    /// Number of tags, empty ones included.
    pub fn tag_count(&self) -> Result<usize> {
        Ok(self.inner.read()?.tags.len())
    }
}

impl<V, C> Cache for TagCache<V, C>
where
    V: Clone + Send + Sync + 'static,
    C: Clock,
{
    type Value = V;

    fn get(&self, key: &str) -> Result<Option<V>> {
        let now = self.clock.now_ms();
        let value = self.inner.read()?.store.get(key, now).cloned();
        self.stats.record_lookup(value.is_some());
        Ok(value)
    }

    fn set(&self, key: &str, value: V, ttl: Duration) -> Result<()> {
        let now = self.clock.now_ms();
        self.inner.write()?.store.set(key, value, ttl, now);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.inner.write()?.store.delete(key);
        Ok(())
    }

    fn is_hit(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    fn clear_expired(&self) -> Result<usize> {
        let now = self.clock.now_ms();
        let removed = self.inner.write()?.store.clear_expired(now);
        self.stats.record_expired(removed);
        if removed > 0 {
            info!("Removed {} expired entries", removed);
        }
        Ok(removed)
    }
}

impl<V, C> TaggedCache for TagCache<V, C>
where
    V: Clone + Send + Sync + 'static,
    C: Clock,
{
    fn set_with_tag(&self, key: &str, tag: &str, value: V, ttl: Duration) -> Result<()> {
        let now = self.clock.now_ms();
        let mut inner = self.inner.write()?;
        inner.store.set(key, value, ttl, now);
        inner.tags.add(tag, key);
        Ok(())
    }

    fn get_keys(&self, tag: &str) -> Result<Vec<String>> {
        Ok(self.inner.read()?.tags.keys(tag))
    }

    fn delete_with_tag(&self, tag: &str) -> Result<()> {
        let mut inner = self.inner.write()?;
        let keys = inner.tags.remove(tag);
        for key in &keys {
            inner.store.delete(key);
        }
        debug!("Deleted tag '{}' with {} keys", tag, keys.len());
        Ok(())
    }

    fn clear_tag(&self) -> Result<usize> {
        let now = self.clock.now_ms();
        let mut guard = self.inner.write()?;
        let inner = &mut *guard;

        let dead = inner.tags.dead_tags(|key| inner.store.is_hit(key, now));
        for tag in &dead {
            for key in inner.tags.remove(tag) {
                inner.store.delete(&key);
            }
        }

        self.stats.record_tags_swept(dead.len());
        if dead.is_empty() {
            debug!("Tag sweep: no dead tags found");
        } else {
            info!("Tag sweep: removed {} dead tags", dead.len());
        }
        Ok(dead.len())
    }
}
