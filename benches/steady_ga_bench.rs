//! Criterion benchmarks for the steady-state bitstring search.
//!
//! Uses OneMax to measure pure engine overhead independent of any real
//! fitness function, plus micro-benchmarks of the bit-level operators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use steady_ga::bits::hamming_agreement;
use steady_ga::operators::single_point_crossover;
use steady_ga::{SearchConfig, SearchRunner};

fn one_max(bits: &[u8]) -> f64 {
    bits.iter().map(|b| b.count_ones() as f64).sum()
}

fn bench_one_max_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_max_search");
    group.sample_size(10);

    for num_bits in [64usize, 256, 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_bits),
            &num_bits,
            |b, &num_bits| {
                b.iter(|| {
                    let config = SearchConfig::new(num_bits)
                        .with_stagnation_limit(100)
                        .with_seed(42);
                    black_box(SearchRunner::run(&one_max, &config))
                });
            },
        );
    }

    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let parent1: Vec<u8> = (0..128).map(|_| rng.random()).collect();
    let parent2: Vec<u8> = (0..128).map(|_| rng.random()).collect();

    c.bench_function("single_point_crossover_1024_bits", |b| {
        b.iter(|| black_box(single_point_crossover(&parent1, &parent2, &mut rng)));
    });

    c.bench_function("hamming_agreement_1024_bits", |b| {
        b.iter(|| black_box(hamming_agreement(&parent1, &parent2)));
    });
}

criterion_group!(benches, bench_one_max_search, bench_operators);
criterion_main!(benches);
