//! Pool allocator benchmarks
//!
//! Measures the cursor hot path against the system allocator baseline.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use fixed_pool::{PoolAllocator, PoolConfig};
use std::hint::black_box;

/// Benchmark single allocation/release cycle
fn bench_allocate_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_release");

    group.bench_function("pool_64b", |b| {
        let pool = PoolAllocator::with_config(1024 * 1024, PoolConfig::production()).unwrap();

        b.iter(|| {
            let handle = pool.allocate(64).unwrap();
            black_box(handle);
            // First allocation of the epoch, so release resets the arena
            pool.release(handle);
        });
    });

    // System allocator (baseline)
    group.bench_function("system_64b", |b| {
        let layout = std::alloc::Layout::from_size_align(64, 1).unwrap();

        b.iter(|| unsafe {
            let ptr = std::alloc::alloc(layout);
            black_box(ptr);
            std::alloc::dealloc(ptr, layout);
        });
    });

    group.finish();
}

/// Benchmark batch allocations followed by a single reset
fn bench_batch_allocations(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_allocations");
    group.throughput(Throughput::Elements(100));

    group.bench_function("pool_100x64b", |b| {
        let pool = PoolAllocator::with_config(1024 * 1024, PoolConfig::production()).unwrap();

        b.iter(|| {
            let first = pool.allocate(64).unwrap();
            for _ in 0..99 {
                black_box(pool.allocate(64).unwrap());
            }
            pool.release(first);
        });
    });

    group.bench_function("system_100x64b", |b| {
        let layout = std::alloc::Layout::from_size_align(64, 1).unwrap();

        b.iter(|| unsafe {
            let mut ptrs = Vec::with_capacity(100);
            for _ in 0..100 {
                ptrs.push(std::alloc::alloc(layout));
            }
            for ptr in ptrs {
                std::alloc::dealloc(ptr, layout);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_allocate_release, bench_batch_allocations);
criterion_main!(benches);
