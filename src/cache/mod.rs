//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and tag-based invalidation.

mod clock;
mod entry;
mod memory;
mod stats;
mod store;
mod tag_cache;
mod tags;
mod traits;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use stats::CacheStats;
pub use store::EntryStore;
pub use tag_cache::TagCache;
pub use tags::TagIndex;
pub use traits::{Cache, TaggedCache};
