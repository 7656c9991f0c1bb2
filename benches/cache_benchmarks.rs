//! Performance benchmarks for the timed cache.
//!
//! These benchmarks measure:
//! - Writes with and without a TTL
//! - Hits, misses and expired lookups
//! - Reads under contention from several threads

use chrono::TimeDelta;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::thread;
use std::time::Duration;
use timed_cache::{CacheConfig, ManualClock, TimedCache};

fn filled_cache(size: usize) -> TimedCache<u64> {
    let cache = TimedCache::new();
    for i in 0..size {
        cache
            .set(format!("key{}", i), i as u64, TimeDelta::seconds(300))
            .unwrap();
    }
    cache
}

fn bench_set(c: &mut Criterion) {
    let cache = TimedCache::new();
    let mut group = c.benchmark_group("set");

    group.bench_function("no_ttl", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i = (i + 1) % 1024;
            cache
                .set(format!("key{}", i), black_box(i), TimeDelta::zero())
                .unwrap();
        });
    });

    group.bench_function("with_ttl", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i = (i + 1) % 1024;
            cache
                .set(format!("key{}", i), black_box(i), TimeDelta::seconds(60))
                .unwrap();
        });
    });

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");

    for size in [100, 10_000, 100_000].iter() {
        let cache = filled_cache(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let key = format!("key{}", size / 2);
            b.iter(|| black_box(cache.get(&key)));
        });
    }

    group.finish();

    let cache = filled_cache(1_000);
    c.bench_function("get_miss", |b| {
        b.iter(|| black_box(cache.get("absent")));
    });

    // Every iteration re-inserts so the lookup always finds a stale entry
    let clock = ManualClock::new();
    let stale = TimedCache::with_clock(CacheConfig::default(), clock.clone());
    c.bench_function("get_expired", |b| {
        b.iter(|| {
            stale.set("k", 1u64, TimeDelta::milliseconds(1)).unwrap();
            clock.advance(Duration::from_millis(2));
            black_box(stale.get("k"))
        });
    });
}

fn bench_contended_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_reads");

    for threads in [2, 4, 8].iter() {
        let cache = filled_cache(1_000);
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            threads,
            |b, &threads| {
                b.iter(|| {
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let cache = cache.clone();
                            thread::spawn(move || {
                                for i in 0..1_000 {
                                    black_box(cache.get(&format!("key{}", (i + t) % 1_000)).ok());
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_set,
        bench_get,
        bench_contended_reads
}

criterion_main!(benches);
