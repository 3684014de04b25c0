//! Branded and raw versions of the same workloads. Each group has a `raw` and
//! a `branded` function so `cargo run -p xtask -- bench` can pair them up.

use branded::{brand, Brand};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashMap;

brand! {
    pub type UserId = String as "UserId";
    pub type Cents = u64 as "Cents";
}

const SIZES: &[usize] = &[1_000, 100_000];

fn bench_slice_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_sum");

    for &n in SIZES {
        let raw: Vec<u64> = (0..n as u64).collect();
        let branded: Vec<Cents> = raw.iter().copied().map(Cents::assume).collect();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("raw", n), &raw, |b, values| {
            b.iter(|| black_box(values.iter().sum::<u64>()));
        });
        group.bench_with_input(BenchmarkId::new("branded", n), &branded, |b, values| {
            b.iter(|| black_box(values.iter().map(|c| **c).sum::<u64>()));
        });
    }

    group.finish();
}

fn bench_map_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_lookup");

    for &n in SIZES {
        let keys: Vec<String> = (0..n).map(|i| format!("user-{i}")).collect();
        let raw: HashMap<String, usize> = keys.iter().cloned().zip(0..).collect();
        let branded: HashMap<UserId, usize> = keys.iter().cloned().map(UserId::assume).zip(0..).collect();
        let branded_keys: &[UserId] = Brand::from_slice(&keys);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("raw", n), &keys, |b, keys| {
            b.iter(|| keys.iter().filter_map(|k| raw.get(k)).sum::<usize>());
        });
        group.bench_with_input(BenchmarkId::new("branded", n), &branded_keys, |b, keys| {
            b.iter(|| keys.iter().filter_map(|k| branded.get(k)).sum::<usize>());
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for &n in SIZES {
        let raw: Vec<u64> = (0..n as u64).map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15)).collect();
        let branded: Vec<Cents> = raw.iter().copied().map(Cents::assume).collect();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("raw", n), &raw, |b, values| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort_unstable();
                black_box(v)
            });
        });
        group.bench_with_input(BenchmarkId::new("branded", n), &branded, |b, values| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort_unstable();
                black_box(v)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_slice_sum, bench_map_lookup, bench_sort);
criterion_main!(benches);
