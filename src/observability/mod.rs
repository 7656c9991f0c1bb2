//! Observability for cache instances.
//!
//! Counters live here; log events are emitted with `tracing` where the cache
//! mutates state.

pub mod stats;

pub use stats::{CacheStats, StatsSummary};
