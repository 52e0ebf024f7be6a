use criterion::{black_box, criterion_group, criterion_main, Criterion};

use minishogi::*;

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    c.bench_function("perft_3", |b| {
        let pos = Position::startpos();
        b.iter(|| perft(black_box(&pos), 3))
    });

    c.bench_function("search_depth_3", |b| {
        let pos = Position::startpos();
        b.iter(|| search_best_move(black_box(&pos), 3))
    });
}
