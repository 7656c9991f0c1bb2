//! Timed Cache - demo entry point
//!
//! Walks a cache through the store / read / expire / forget cycle and prints the
//! resulting access counters as JSON on stdout. Logs go to stderr.

use anyhow::Result;
use chrono::TimeDelta;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use timed_cache::{Cache, CacheConfig, CacheError, TimedCache};
use tracing::{error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

/// RUST_LOG (possibly loaded from .env) wins over LOG_LEVEL.
fn configured_filter(config: &CacheConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()))
}

fn main() -> Result<()> {
    // Initialize logging (stderr only, stdout carries the JSON summary).
    // Starts at "error" so configuration failures are reported through tracing.
    let (filter, filter_handle) = reload::Layer::new(EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = match CacheConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = filter_handle.reload(configured_filter(&config)) {
        error!("Failed to apply log level {}: {}", config.log_level, e);
    }

    info!("Configuration loaded, default TTL: {:?}", config.default_ttl);

    let timed: TimedCache<i64> = TimedCache::with_config(config);
    let cache: Arc<dyn Cache<i64>> = Arc::new(timed.clone());

    cache.set("a", 42, TimeDelta::milliseconds(50))?;
    cache.set("pinned", 7, TimeDelta::zero())?;
    info!("Read back a = {}", cache.get("a")?);

    if let Err(e) = cache.set("bad", 1, TimeDelta::milliseconds(-1)) {
        info!("Rejected write: {}", e);
    }

    thread::sleep(Duration::from_millis(60));

    match cache.get("a") {
        Err(CacheError::Expired(key)) => info!("Key {} expired", key),
        other => {
            error!("Expected expiry, got {:?}", other);
            anyhow::bail!("entry outlived its TTL");
        }
    }
    match cache.get("a") {
        Err(CacheError::NotFound(key)) => info!("Key {} is gone", key),
        other => {
            error!("Expected lazy removal, got {:?}", other);
            anyhow::bail!("expired entry was not removed");
        }
    }

    info!("Pinned value still present: {}", cache.get("pinned")?);
    cache.delete("pinned");
    cache.clear();

    let summary = timed.stats().summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);

    info!("Demo complete, {} entries left", timed.len());
    Ok(())
}
