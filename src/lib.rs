//! Timed Cache - a thread-safe in-process key/value store with per-entry TTL.
//!
//! Values are stored under string keys with an optional time-to-live. Expired
//! entries are detected lazily when read and reported as
//! [`CacheError::Expired`], distinct from keys that were never stored.
//!
//! # Architecture
//!
//! - **cache**: The `TimedCache` store, its `Cache` trait and clock sources
//!   (`ManualClock` is a test clock, not for production use)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration defaults and environment loading
//! - **observability**: Access counters shared by cache clones
//!
//! # Example
//!
//! ```
//! use chrono::TimeDelta;
//! use timed_cache::{CacheError, TimedCache};
//!
//! let cache = TimedCache::new();
//! cache.set("a", 42, TimeDelta::seconds(60)).unwrap();
//! assert_eq!(cache.get("a"), Ok(42));
//! assert_eq!(cache.get("b"), Err(CacheError::NotFound("b".to_string())));
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod observability;

pub use cache::{Cache, Clock, Item, SystemClock, TimedCache};
// Test clock for deterministic expiry in downstream tests
pub use cache::ManualClock;
pub use config::CacheConfig;
pub use error::{CacheError, CacheResult, ConfigError, ConfigResult};
pub use observability::{CacheStats, StatsSummary};
