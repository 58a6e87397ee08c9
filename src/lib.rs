//! Tag Cache - An in-process key-value cache
//!
//! Provides lazy TTL expiration and tag-based invalidation of groups of keys.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{
    Cache, CacheStats, Clock, ManualClock, MemoryCache, SystemClock, TagCache, TaggedCache,
};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
