/*!
 * Sharded Cache Benchmarks
 *
 * Compare contended throughput across shard counts
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shardcache::ShardedCache;
use std::sync::Arc;
use std::thread;

fn bench_uncontended_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended_ops");

    let cache = ShardedCache::new(16).unwrap();
    for key in 0..1024 {
        cache.insert(key, key);
    }

    group.bench_function("insert", |b| {
        let mut key = 0i64;
        b.iter(|| {
            cache.insert(black_box(key), key);
            key = key.wrapping_add(1);
        });
    });

    group.bench_function("lookup_hit", |b| {
        let mut key = 0i64;
        b.iter(|| {
            let value = cache.lookup(black_box(key % 1024));
            key = key.wrapping_add(1);
            black_box(value)
        });
    });

    group.bench_function("lookup_miss", |b| {
        b.iter(|| black_box(cache.lookup(black_box(-1))));
    });

    group.finish();
}

fn bench_contended_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_inserts");
    let threads = 8;

    for shard_count in [1usize, 4, 16, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(shard_count),
            &shard_count,
            |b, &shard_count| {
                b.iter(|| {
                    let cache = Arc::new(ShardedCache::new(shard_count).unwrap());
                    let mut handles = vec![];

                    for t in 0..threads as i64 {
                        let cache = cache.clone();
                        handles.push(thread::spawn(move || {
                            for i in 0..500 {
                                cache.insert(t * 500 + i, i);
                            }
                        }));
                    }

                    for handle in handles {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_read_heavy_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_heavy_mix");
    let threads = 8;

    for shard_count in [1usize, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(shard_count),
            &shard_count,
            |b, &shard_count| {
                let cache = Arc::new(ShardedCache::new(shard_count).unwrap());
                for key in 0..4096 {
                    cache.insert(key, key);
                }

                b.iter(|| {
                    let mut handles = vec![];

                    for t in 0..threads as i64 {
                        let cache = cache.clone();
                        handles.push(thread::spawn(move || {
                            // 1 write per 16 reads
                            for i in 0..1000i64 {
                                let key = (t * 37 + i * 17) % 4096;
                                if i % 16 == 0 {
                                    cache.insert(key, i);
                                } else {
                                    black_box(cache.lookup(key));
                                }
                            }
                        }));
                    }

                    for handle in handles {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_uncontended_ops,
    bench_contended_inserts,
    bench_read_heavy_mix
);
criterion_main!(benches);
