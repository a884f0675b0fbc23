use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lifeframe::{Board, factory, render, step};
use rand::{SeedableRng, rngs::StdRng};

fn make_soup(width: usize, height: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    factory::random(width, height, factory::DEFAULT_LIVE_PROBABILITY, &mut rng)
        .expect("non-empty soup")
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [64, 128, 256] {
        let board = make_soup(size, size);

        group.bench_with_input(BenchmarkId::new("step", size), &board, |b, board| {
            b.iter(|| step(board));
        });
        group.bench_with_input(BenchmarkId::new("render", size), &board, |b, board| {
            b.iter(|| render(board));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
