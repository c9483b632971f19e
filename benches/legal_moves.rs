//! Criterion benchmarks for board legality queries and snapshots.
//!
//! Run with:
//!     cargo bench --bench legal_moves

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rust_cluedo::board::{BoardLayout, GridBoard};
use rust_cluedo::{CluedoGameBuilder, GridPosition, Suspect, Topology};

fn reference() -> GridBoard {
    BoardLayout::reference()
        .build("Cellar")
        .unwrap_or_else(|e| panic!("reference layout must build: {e}"))
}

fn bench_is_legal_destination(c: &mut Criterion) {
    let board = reference();
    let cells: Vec<GridPosition> = board.tiles().map(|(p, _)| p).collect();

    c.bench_function("is_legal_destination/all_neighbours", |b| {
        b.iter(|| {
            let mut legal = 0usize;
            for &from in &cells {
                for to in from.neighbors() {
                    if board.is_legal_destination(from, to) {
                        legal += 1;
                    }
                }
            }
            legal
        });
    });
}

fn bench_neighbors(c: &mut Criterion) {
    let board = reference();
    let mut group = c.benchmark_group("neighbors");

    let spots = [
        ("corridor", GridPosition::new(7, 7)),
        ("door_cell", GridPosition::new(6, 4)),
        ("room_three_doors", GridPosition::new(20, 11)),
        ("home_base", GridPosition::new(11, 11)),
    ];
    for (label, at) in spots {
        group.bench_with_input(BenchmarkId::new("from", label), &at, |b, &at| {
            b.iter(|| board.neighbors(black_box(at)));
        });
    }

    group.finish();
}

fn bench_layout_build(c: &mut Criterion) {
    let layout = BoardLayout::reference();
    c.bench_function("layout/build_reference", |b| {
        b.iter(|| layout.build(black_box("Cellar")));
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut builder = CluedoGameBuilder::new();
    for (i, token) in Suspect::ALL.iter().enumerate() {
        builder = builder.seat(format!("P{i}"), *token);
    }
    let game = builder
        .build()
        .unwrap_or_else(|e| panic!("six-seat game must build: {e}"));

    let mut group = c.benchmark_group("snapshot");
    group.bench_function("take", |b| b.iter(|| game.snapshot()));

    let snap = game.snapshot();
    group.bench_function("to_bytes", |b| b.iter(|| snap.to_bytes()));
    group.finish();
}

criterion_group!(
    benches,
    bench_is_legal_destination,
    bench_neighbors,
    bench_layout_build,
    bench_snapshot,
);
criterion_main!(benches);
