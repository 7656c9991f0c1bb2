//! Time-based cache with per-entry TTL (Time To Live) support.
//!
//! Expiration is lazy: a stale entry stays in memory until a `get` trips over
//! it, until `clear`, or until the caller runs `purge_expired`. Nothing sweeps
//! in the background.

use super::clock::{Clock, SystemClock};
use super::item::Item;
use super::traits::Cache;
use crate::config::CacheConfig;
use crate::error::{CacheError, CacheResult};
use crate::observability::CacheStats;
use chrono::TimeDelta;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

type ItemMap<V> = HashMap<String, Item<V>>;

/// A thread-safe cache with per-entry expiration.
///
/// The cache can be cloned cheaply; clones share the same entries and counters.
///
/// # Memory Efficiency with Arc
///
/// `get` returns a clone of the stored value. For large values, store an `Arc`:
/// ```
/// use std::sync::Arc;
/// use chrono::TimeDelta;
/// use timed_cache::TimedCache;
///
/// let cache: TimedCache<Arc<Vec<u8>>> = TimedCache::new();
/// cache.set("blob", Arc::new(vec![0; 4096]), TimeDelta::zero()).unwrap();
/// assert_eq!(cache.get("blob").unwrap().len(), 4096);
/// ```
#[derive(Clone)]
pub struct TimedCache<V> {
    items: Arc<RwLock<ItemMap<V>>>,
    clock: Arc<dyn Clock>,
    default_ttl: Duration,
    stats: CacheStats,
}

impl<V: Clone> TimedCache<V> {
    /// Create an empty cache using the system clock and default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create an empty cache using the system clock.
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create an empty cache reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: impl Clock + 'static) -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            clock: Arc::new(clock),
            default_ttl: config.default_ttl,
            stats: CacheStats::new(),
        }
    }

    /// Store a value under `key` for `ttl`.
    ///
    /// A zero `ttl` means the entry never expires. An existing entry is
    /// replaced outright, value and deadline both.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidTtl` for a negative `ttl`; the cache is left untouched.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: TimeDelta) -> CacheResult<()> {
        let ttl_std = match ttl.to_std() {
            Ok(ttl) => ttl,
            Err(_) => {
                self.stats.record_rejected_write();
                return Err(CacheError::InvalidTtl(ttl));
            }
        };

        self.store(key.into(), value, ttl_std);
        Ok(())
    }

    /// Store a value using the configured default TTL.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.store(key.into(), value, self.default_ttl);
    }

    fn store(&self, key: String, value: V, ttl: Duration) {
        let item = Item::new(value, ttl, self.clock.now());
        self.write().insert(key, item);
        self.stats.record_write();
    }

    /// Get a value from the cache.
    ///
    /// # Errors
    ///
    /// - `CacheError::NotFound` if nothing is stored under `key`
    /// - `CacheError::Expired` if the entry's deadline has passed; the entry is
    ///   removed, so the next call reports `NotFound`
    pub fn get(&self, key: &str) -> CacheResult<V> {
        let now = self.clock.now();

        {
            let items = self.read();
            match items.get(key) {
                None => {
                    self.stats.record_miss();
                    return Err(CacheError::NotFound(key.to_string()));
                }
                Some(item) if !item.is_expired_at(now) => {
                    self.stats.record_hit();
                    return Ok(item.value.clone());
                }
                Some(_) => {}
            }
        }

        Err(self.evict_expired(key, now))
    }

    // Second half of `get` once the read lock showed `key` as stale at `now`.
    // The lock was released in between, so the entry may have been removed or
    // replaced by another caller.
    fn evict_expired(&self, key: &str, now: Instant) -> CacheError {
        let mut items = self.write();
        let still_expired = items.get(key).map(|item| item.is_expired_at(now));

        match still_expired {
            // Another reader collected it first; this call is ordered after that one
            None => {
                drop(items);
                self.stats.record_miss();
                CacheError::NotFound(key.to_string())
            }
            // Refreshed by a concurrent `set`; this call is ordered before it
            Some(false) => {
                drop(items);
                self.stats.record_expired();
                CacheError::Expired(key.to_string())
            }
            Some(true) => {
                items.remove(key);
                drop(items);
                tracing::trace!(key = %key, "Removed expired entry");
                self.stats.record_expired();
                CacheError::Expired(key.to_string())
            }
        }
    }

    /// Check if a live entry exists for `key`. Never removes anything.
    pub fn contains_key(&self, key: &str) -> bool {
        let now = self.clock.now();
        self.read()
            .get(key)
            .is_some_and(|item| !item.is_expired_at(now))
    }

    /// Time left before `key` expires; `Ok(None)` if it never does.
    ///
    /// Unlike `get`, an expired entry is reported but left in place.
    pub fn ttl_remaining(&self, key: &str) -> CacheResult<Option<Duration>> {
        let now = self.clock.now();
        match self.read().get(key) {
            None => Err(CacheError::NotFound(key.to_string())),
            Some(item) if item.is_expired_at(now) => Err(CacheError::Expired(key.to_string())),
            Some(item) => Ok(item.remaining(now)),
        }
    }

    /// Remove a specific key from the cache.
    pub fn delete(&self, key: &str) {
        self.write().remove(key);
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        let mut items = self.write();
        let dropped = items.len();
        items.clear();
        drop(items);

        tracing::debug!(entries = dropped, "Cache cleared");
    }

    /// Remove all expired entries and return how many were dropped.
    ///
    /// Only runs when called; `get` already hides expired entries, so this is
    /// purely for reclaiming memory.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut items = self.write();
        let before = items.len();
        items.retain(|_, item| !item.is_expired_at(now));
        let removed = before - items.len();
        drop(items);

        if removed > 0 {
            tracing::debug!(removed = removed, "Purged expired entries");
        }
        removed
    }

    /// Get the number of entries in the cache (including expired ones).
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// TTL applied by `insert`.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Access counters shared by every clone of this cache.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    // A panic while the lock was held cannot leave the map half-written, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, ItemMap<V>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ItemMap<V>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> Default for TimedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Cache<V> for TimedCache<V>
where
    V: Clone + Send + Sync,
{
    fn set(&self, key: &str, value: V, ttl: TimeDelta) -> CacheResult<()> {
        TimedCache::set(self, key, value, ttl)
    }

    fn get(&self, key: &str) -> CacheResult<V> {
        TimedCache::get(self, key)
    }

    fn delete(&self, key: &str) {
        TimedCache::delete(self, key)
    }

    fn clear(&self) {
        TimedCache::clear(self)
    }
}

impl<V: Clone> std::fmt::Debug for TimedCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("default_ttl", &self.default_ttl)
            .field("entries", &self.len())
            .finish()
    }
}
