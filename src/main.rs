//! Tag Cache demo
//!
//! Walks through the plain and tagged cache operations, prints the resulting
//! statistics, then keeps the background sweep running until Ctrl+C.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tag_cache::{spawn_cleanup_task, Cache, Config, MemoryCache, TagCache, TaggedCache};

/// Entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the untagged walkthrough on a `MemoryCache`
/// 4. Run the tagged walkthrough on a `TagCache`
/// 5. Start the background sweep and wait for Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tag_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cleanup_interval={}s, sweep_tags={}",
        config.cleanup_interval, config.sweep_tags
    );

    plain_walkthrough()?;

    let cache = Arc::new(TagCache::<String>::new());
    tagged_walkthrough(&cache)?;

    let stats = cache.stats()?;
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).context("failed to serialize stats")?
    );

    let cleanup_handle = spawn_cleanup_task(cache, config.cleanup_interval, config.sweep_tags);
    info!("Background sweep started, press Ctrl+C to exit");

    signal::ctrl_c()
        .await
        .context("failed to install Ctrl+C handler")?;
    cleanup_handle.abort();
    warn!("Sweep task aborted");

    Ok(())
}

fn plain_walkthrough() -> anyhow::Result<()> {
    let cache = MemoryCache::<String>::new();
    let key = "key1";

    cache.set(key, "cache value".to_string(), Duration::ZERO)?;
    println!("{:?}", cache.get(key)?); // Some("cache value")

    cache.delete(key)?;
    println!("{:?}", cache.get(key)?); // None
    Ok(())
}

fn tagged_walkthrough(cache: &TagCache<String>) -> anyhow::Result<()> {
    let tag = "tag1";

    cache.set_with_tag("key1", tag, "tag-cache value1".to_string(), Duration::ZERO)?;
    cache.set_with_tag("key2", tag, "tag-cache value2".to_string(), Duration::ZERO)?;
    cache.set_with_tag("session", "short", "expires".to_string(), Duration::from_secs(1))?;

    let mut keys = cache.get_keys(tag)?;
    keys.sort();
    println!("{:?}", keys); // ["key1", "key2"]
    println!("{:?}", cache.get("key1")?);
    println!("{:?}", cache.get("key2")?);

    cache.delete_with_tag(tag)?;
    println!("{:?}", cache.get_keys(tag)?); // []
    println!("{:?}", cache.get("key1")?); // None
    println!("{:?}", cache.get("key2")?); // None
    Ok(())
}
