//! Trie Hash Generator Benchmarks
//!
//! Measures trie construction and code emission for keyword sets of
//! increasing size, using the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use trie_hash_gen_lib::generator::{GeneratorOptions, Trie, TrieHashGen};

/// Keywords sharing prefixes the way identifiers in a grammar do.
fn keywords(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("kw_{}_{}", i % 37, i))
        .collect()
}

/// Benchmark trie construction
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_build");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [10, 100, 1000].iter() {
        let input = keywords(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &input, |b, input| {
            b.iter(|| {
                black_box(Trie::build(input.iter().cloned(), &GeneratorOptions::default()).unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark code emission
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_generate");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    for size in [10, 100, 1000].iter() {
        let generator = TrieHashGen::new(keywords(*size)).unwrap();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("generate", size), &generator, |b, generator| {
            b.iter(|| black_box(generator.generate()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02);
    targets = bench_build, bench_generate
}

criterion_main!(benches);
