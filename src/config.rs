//! Configuration Module
//!
//! Handles loading and managing sweep configuration from environment variables.

use std::env;

use tracing::warn;

/// Shortest sweep interval the background task will run at, in seconds
pub const MIN_CLEANUP_INTERVAL: u64 = 1;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Background sweep interval in seconds
    pub cleanup_interval: u64,
    /// Whether the background sweep also removes fully dead tags
    pub sweep_tags: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds, at least 1 (default: 1)
    /// - `SWEEP_TAGS` - Run the tag sweep in the background (default: true);
    ///   accepts `true/false`, `1/0`, `yes/no`, `on/off`
    pub fn from_env() -> Self {
        Self {
            cleanup_interval: parse_interval(env::var("CLEANUP_INTERVAL").ok().as_deref()),
            sweep_tags: parse_flag(env::var("SWEEP_TAGS").ok().as_deref(), true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cleanup_interval: 1,
            sweep_tags: true,
        }
    }
}

/// Parses a sweep interval, raising anything below the minimum.
fn parse_interval(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 1;
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs < MIN_CLEANUP_INTERVAL => {
            warn!(
                "CLEANUP_INTERVAL={} is below {}s, using {}s",
                secs, MIN_CLEANUP_INTERVAL, MIN_CLEANUP_INTERVAL
            );
            MIN_CLEANUP_INTERVAL
        }
        Ok(secs) => secs,
        Err(_) => {
            warn!("Ignoring unparsable CLEANUP_INTERVAL={:?}, using 1s", raw);
            1
        }
    }
}

/// Parses a boolean switch, falling back to `default` on unknown input.
fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            warn!("Ignoring unparsable flag value {:?}, using {}", raw, default);
            default
        }
    }
}
