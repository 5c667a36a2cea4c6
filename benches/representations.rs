//! Benchmarks comparing the cube encodings under the same work.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cubesearch::prelude::*;

const SCRAMBLE: &str = "R2 U' L' R2 B2 F' L F2 U2 L' U' B D U2 L2 D2 U R' B F' L R F U R2 B' F2 L2 U' L";

fn apply_scramble<C: CubeLike>(c: &mut Criterion) {
    let moves = Move::parse_sequence(SCRAMBLE).unwrap();
    c.bench_function(&format!("{}/apply_scramble", C::NAME), |b| {
        b.iter(|| C::solved().apply_all(black_box(moves.iter().copied())))
    });
}

fn solve_iddfs<C: CubeLike>(c: &mut Criterion) {
    let cube = C::solved().apply_all(Move::parse_sequence("R U F' L2 D").unwrap());
    Heuristic::get();

    let mut group = c.benchmark_group(C::NAME);
    group.sample_size(10);
    group.bench_function("iddfs_5", |b| b.iter(|| Iddfs::default().solve(black_box(&cube))));
    group.finish();
}

fn solve_bfs<C: CubeLike>(c: &mut Criterion) {
    let cube = C::solved().apply_all(Move::parse_sequence("R U F'").unwrap());

    let mut group = c.benchmark_group(C::NAME);
    group.sample_size(10);
    group.bench_function("bfs_3", |b| b.iter(|| Bfs::default().solve(black_box(&cube))));
    group.finish();
}

fn benches(c: &mut Criterion) {
    apply_scramble::<FlatCube>(c);
    apply_scramble::<GridCube>(c);
    apply_scramble::<BitCube>(c);

    solve_iddfs::<FlatCube>(c);
    solve_iddfs::<GridCube>(c);
    solve_iddfs::<BitCube>(c);

    solve_bfs::<FlatCube>(c);
    solve_bfs::<GridCube>(c);
    solve_bfs::<BitCube>(c);
}

criterion_group!(representations, benches);
criterion_main!(representations);
