//! Benchmarks for matrix arithmetic on randomly filled operands

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orthlist::{fill_random, OrthogonalMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn dense(side: i32, rng: &mut StdRng) -> OrthogonalMatrix {
    let mut matrix = OrthogonalMatrix::new(side, side).unwrap();
    fill_random(&mut matrix, -100, 100, rng).unwrap();
    matrix
}

/// Roughly `density` of the cells written, in random order
fn sparse(side: i32, density: f64, rng: &mut StdRng) -> OrthogonalMatrix {
    let count = ((side * side) as f64 * density) as usize;
    let cells: Vec<(i32, i32, i32)> = (0..count)
        .map(|_| (rng.gen_range(0..side), rng.gen_range(0..side), rng.gen_range(-100..=100)))
        .collect();
    OrthogonalMatrix::from_entries(side, side, cells).unwrap()
}

fn bench_set_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_value");

    for &side in &[16, 64, 128] {
        group.bench_with_input(BenchmarkId::new("random_order", side), &side, |b, &side| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| black_box(sparse(side, 0.1, &mut rng)))
        });
    }

    group.finish();
}

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");
    let mut rng = StdRng::seed_from_u64(7);

    for &side in &[8, 32, 64] {
        let a = dense(side, &mut rng);
        let b = dense(side, &mut rng);
        let s = sparse(side, 0.05, &mut rng);

        group.bench_with_input(BenchmarkId::new("add", side), &side, |bench, _| {
            bench.iter(|| black_box(a.add(&b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("multiply", side), &side, |bench, _| {
            bench.iter(|| black_box(a.multiply(&b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("transpose_sparse", side), &side, |bench, _| {
            bench.iter(|| black_box(s.transpose().unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_value, bench_operations);
criterion_main!(benches);
