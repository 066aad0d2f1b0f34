//! Performance benchmarks for the key-value store.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ledgerkv::{Command, Query, Store, StoreConfig};

fn populate(store: &Store, count: usize) {
    for i in 0..count {
        store.apply(Command::put(format!("key{}", i % 1000), format!("value{i}")));
        if i % 10 == 9 {
            store.apply(Command::delete(format!("key{}", (i * 7) % 1000)));
        }
    }
}

/// Benchmark applying commands to a pre-sized store
fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("puts", count), &count, |b, &count| {
            b.iter(|| {
                let store = Store::with_config(StoreConfig {
                    initial_capacity: 1000,
                    log_capacity: count,
                });
                for i in 0..count {
                    store.apply(Command::put(format!("key{}", i % 1000), "v"));
                }
                black_box(store.log_len());
            });
        });
    }

    group.finish();
}

/// Benchmark point reads
fn bench_execute(c: &mut Criterion) {
    let store = Store::new();
    populate(&store, 10_000);
    let query = Query::get("key500");

    c.bench_function("execute_get", |b| {
        b.iter(|| {
            let _ = black_box(store.execute(&query));
        });
    });
}

/// Benchmark replay with varying log lengths
fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");

    for log_len in [100, 1_000, 10_000, 50_000] {
        group.bench_with_input(
            BenchmarkId::new("log_len", log_len),
            &log_len,
            |b, &log_len| {
                let store = Store::new();
                populate(&store, log_len);

                b.iter(|| {
                    store.replay();
                    black_box(store.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_apply, bench_execute, bench_replay);
criterion_main!(benches);
