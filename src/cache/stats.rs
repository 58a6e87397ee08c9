//! Cache Statistics Module
//!
//! Tracks hits, misses and sweep results. Counters are atomics so reads can
//! record under the shared lock.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of cache metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of expired entries removed by `clear_expired`
    pub expired_removed: u64,
    /// Number of tags removed by `clear_tag`
    pub tags_swept: u64,
    /// Current number of stored entries, expired ones included
    pub total_entries: usize,
    /// Current number of tags
    pub total_tags: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Live counters owned by a cache instance.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
    expired_removed: AtomicU64,
    tags_swept: AtomicU64,
}

impl StatsRecorder {
    pub(crate) fn record_lookup(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_expired(&self, count: usize) {
        self.expired_removed.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_tags_swept(&self, count: usize) {
        self.tags_swept.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, total_entries: usize, total_tags: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired_removed: self.expired_removed.load(Ordering::Relaxed),
            tags_swept: self.tags_swept.load(Ordering::Relaxed),
            total_entries,
            total_tags,
        }
    }
}
