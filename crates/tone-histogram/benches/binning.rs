//! Binning throughput over realistic metric value distributions

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tone_histogram::RoundBinner;

fn hue_values(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.0..360.0)).collect()
}

fn percent_values(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.0..100.0)).collect()
}

fn bench_binning(c: &mut Criterion) {
    let binner = RoundBinner::new();
    let mut group = c.benchmark_group("round_binner");

    for &n in &[100usize, 1_000, 10_000, 100_000] {
        let hues = hue_values(n, 42);
        group.bench_with_input(BenchmarkId::new("hue", n), &hues, |b, values| {
            b.iter(|| binner.build(black_box(values)).unwrap())
        });

        let lightness = percent_values(n, 43);
        group.bench_with_input(BenchmarkId::new("lightness", n), &lightness, |b, values| {
            b.iter(|| binner.build(black_box(values)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_binning);
criterion_main!(benches);
