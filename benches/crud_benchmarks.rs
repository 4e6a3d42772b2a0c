use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;
use beni_tree::RbTree;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn key_orders() -> [(&'static str, Vec<i64>); 3] {
    [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ]
}

// ─── Insert / lookup / remove ───────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for (order, keys) in key_orders() {
        group.bench_with_input(BenchmarkId::new("RbTree", order), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RbTree::new();
                for &k in keys {
                    tree.insert(k, k);
                }
                tree
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", order), &keys, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in keys {
                    map.entry(k).or_insert(k);
                }
                map
            });
        });
    }

    group.finish();
}

fn bench_insert_multi(c: &mut Criterion) {
    // Every key arrives four times.
    let keys: Vec<i64> = random_keys(N / 4).into_iter().flat_map(|k| [k; 4]).collect();

    let mut group = c.benchmark_group("insert_multi");

    group.bench_function(BenchmarkId::new("RbTree", N), |b| {
        b.iter(|| {
            let mut tree = RbTree::new();
            for &k in &keys {
                tree.insert_multi(k, k);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap<Vec>", N), |b| {
        b.iter(|| {
            let mut map: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
            for &k in &keys {
                map.entry(k).or_default().push(k);
            }
            map
        });
    });

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for (order, keys) in key_orders() {
        let tree: RbTree<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("RbTree", order), &keys, |b, keys| {
            b.iter(|| {
                let mut sum = 0i64;
                for k in keys {
                    if let Some(&v) = tree.get(k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", order), &keys, |b, keys| {
            b.iter(|| {
                let mut sum = 0i64;
                for k in keys {
                    if let Some(&v) = map.get(k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for (order, keys) in key_orders() {
        let tree: RbTree<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("RbTree", order), &keys, |b, keys| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for k in keys {
                        tree.remove(k);
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", order), &keys, |b, keys| {
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    for k in keys {
                        map.remove(k);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ─── Whole-tree operations ──────────────────────────────────────────────────

fn bench_iterate_and_clone(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: RbTree<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("iterate");
    group.bench_function(BenchmarkId::new("RbTree", N), |b| {
        b.iter(|| tree.values().fold(0i64, |acc, &v| acc.wrapping_add(v)));
    });
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| map.values().fold(0i64, |acc, &v| acc.wrapping_add(v)));
    });
    group.finish();

    let mut group = c.benchmark_group("range");
    let (lo, hi) = (i64::from(i32::MAX / 4), i64::from(i32::MAX / 2));
    group.bench_function(BenchmarkId::new("RbTree", N), |b| {
        b.iter(|| tree.range(black_box(lo)..black_box(hi)).count());
    });
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| map.range(black_box(lo)..black_box(hi)).count());
    });
    group.finish();

    let mut group = c.benchmark_group("clone");
    group.bench_function(BenchmarkId::new("RbTree", N), |b| b.iter(|| tree.clone()));
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| b.iter(|| map.clone()));
    group.finish();
}

criterion_group!(crud_benches, bench_insert, bench_insert_multi, bench_get, bench_remove,);

criterion_group!(whole_tree_benches, bench_iterate_and_clone,);

criterion_main!(crud_benches, whole_tree_benches);
