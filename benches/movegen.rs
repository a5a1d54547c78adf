//! Criterion benchmarks measure time of legal move generation.

use std::fs;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::Itertools;
use rookery::chess::board::Board;
use shakmaty::{CastlingMode, Chess, Position as ShakmatyPosition};

fn read_positions() -> Vec<String> {
    fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/data/positions.fen"
    ))
    .unwrap()
    .lines()
    .map(str::to_string)
    .collect()
}

fn generate_moves(boards: &mut [Board]) {
    for board in boards {
        std::hint::black_box(board.get_all_legal_moves(board.turn()));
    }
}

fn movegen_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Move generation");
    let lines = read_positions();
    let mut boards = lines
        .iter()
        .map(|line| Board::from_placement(&line.split_whitespace().take(2).join(" ")).unwrap())
        .collect::<Vec<_>>();
    group.throughput(criterion::Throughput::Elements(boards.len() as u64));
    group.bench_function(
        BenchmarkId::new(
            "movegen_rookery",
            format!("{} arbitrary positions", boards.len()),
        ),
        |b| {
            b.iter(|| generate_moves(&mut boards));
        },
    );
    // shakmaty is a reasonable reference point: it uses bitboards and
    // precomputed attack tables, so it is expected to be much faster.
    let shakmaty_positions = lines
        .iter()
        .map(|line| {
            let shakmaty_setup: shakmaty::fen::Fen = line.parse().unwrap();
            shakmaty_setup
                .into_position(CastlingMode::Standard)
                .unwrap()
        })
        .collect::<Vec<Chess>>();
    group.bench_with_input(
        BenchmarkId::new(
            "movegen_reference_shakmaty",
            format!("{} arbitrary positions", shakmaty_positions.len()),
        ),
        &shakmaty_positions,
        |b, positions| {
            b.iter(|| {
                for position in positions {
                    std::hint::black_box(position.legal_moves());
                }
            });
        },
    );
    group.finish();
}

fn evaluation_bench(c: &mut Criterion) {
    let board = Board::starting();
    c.bench_function("evaluate starting position", |b| {
        b.iter(|| std::hint::black_box(board.evaluate()));
    });
}

criterion_group! {
    name = movegen;
    config = Criterion::default().sample_size(100);
    targets = movegen_bench, evaluation_bench
}

criterion_main!(movegen);
