//! Access counters for a cache instance.
//!
//! Counters are relaxed atomics shared by every clone of the owning cache, so
//! they can be read from any thread without touching the cache lock.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hit/miss/expiry counters for one cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    hits_total: Arc<AtomicU64>,
    misses_total: Arc<AtomicU64>,
    expired_total: Arc<AtomicU64>,
    writes_total: Arc<AtomicU64>,
    rejected_writes_total: Arc<AtomicU64>,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a lookup that returned a live value.
    pub fn record_hit(&self) {
        self.hits_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a lookup for a key that was not stored.
    pub fn record_miss(&self) {
        self.misses_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a lookup that found a stale entry.
    pub fn record_expired(&self) {
        self.expired_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write(&self) {
        self.writes_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_write(&self) {
        self.rejected_writes_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits_total(&self) -> u64 {
        self.hits_total.load(Ordering::Relaxed)
    }

    pub fn misses_total(&self) -> u64 {
        self.misses_total.load(Ordering::Relaxed)
    }

    pub fn expired_total(&self) -> u64 {
        self.expired_total.load(Ordering::Relaxed)
    }

    pub fn writes_total(&self) -> u64 {
        self.writes_total.load(Ordering::Relaxed)
    }

    pub fn rejected_writes_total(&self) -> u64 {
        self.rejected_writes_total.load(Ordering::Relaxed)
    }

    /// Get the hit rate (0.0 to 1.0). Expired lookups count as misses.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits_total() as f64;
        let total = (self.hits_total() + self.misses_total() + self.expired_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.hits_total.store(0, Ordering::Relaxed);
        self.misses_total.store(0, Ordering::Relaxed);
        self.expired_total.store(0, Ordering::Relaxed);
        self.writes_total.store(0, Ordering::Relaxed);
        self.rejected_writes_total.store(0, Ordering::Relaxed);
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            hits_total: self.hits_total(),
            misses_total: self.misses_total(),
            expired_total: self.expired_total(),
            writes_total: self.writes_total(),
            rejected_writes_total: self.rejected_writes_total(),
            hit_rate: self.hit_rate(),
        }
    }
}

/// A snapshot of counter values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub hits_total: u64,
    pub misses_total: u64,
    pub expired_total: u64,
    pub writes_total: u64,
    pub rejected_writes_total: u64,
    pub hit_rate: f64,
}
