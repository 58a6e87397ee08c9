//! Background Tasks Module
//!
//! Contains background tasks that keep a cache tidy while it is in use.
//!
//! # Tasks
//! - Sweep: removes expired entries and fully dead tags at a fixed interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
