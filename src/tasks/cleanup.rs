//! Sweep Task
//!
//! Background task that periodically removes expired entries and dead tags.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::TaggedCache;
use crate::config::MIN_CLEANUP_INTERVAL;

/// Spawns a background task that periodically sweeps the cache.
///
/// Each round runs `clear_expired` and, when `sweep_tags` is set, `clear_tag`.
/// The cache logs what each sweep removed; a failed round is logged here and
/// the loop carries on. Intervals below one second are raised to one second.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
/// * `sweep_tags` - Also remove tags whose members are all dead
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(TagCache::<String>::new());
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 1, true);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<T>(
    cache: Arc<T>,
    cleanup_interval_secs: u64,
    sweep_tags: bool,
) -> JoinHandle<()>
where
    T: TaggedCache + Send + Sync + 'static,
{
    let interval_secs = cleanup_interval_secs.max(MIN_CLEANUP_INTERVAL);
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!("Starting sweep task with interval of {} seconds", interval_secs);

        loop {
            tokio::time::sleep(interval).await;

            if let Err(err) = cache.clear_expired() {
                warn!("TTL sweep failed: {}", err);
            }

            if sweep_tags {
                if let Err(err) = cache.clear_tag() {
                    warn!("Tag sweep failed: {}", err);
                }
            }
        }
    })
}
