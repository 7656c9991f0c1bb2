//! Trait abstraction over TTL caches.
//!
//! Lets callers hold an `Arc<dyn Cache<V>>` and swap in a test double without
//! depending on [`TimedCache`](super::TimedCache) directly.

use crate::error::CacheResult;
use chrono::TimeDelta;

/// A thread-safe key/value store with per-entry TTL.
pub trait Cache<V>: Send + Sync {
    /// Store `value` under `key`, replacing any previous entry.
    ///
    /// A zero `ttl` never expires; a negative one is rejected with
    /// [`CacheError::InvalidTtl`](crate::CacheError::InvalidTtl).
    fn set(&self, key: &str, value: V, ttl: TimeDelta) -> CacheResult<()>;

    /// Fetch the value for `key`, distinguishing missing from expired entries.
    fn get(&self, key: &str) -> CacheResult<V>;

    /// Remove `key`. Absent keys are ignored.
    fn delete(&self, key: &str);

    /// Remove every entry.
    fn clear(&self);
}
