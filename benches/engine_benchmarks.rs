//! Benchmarks for move generation, evaluation and the search strategies.

use std::sync::atomic::AtomicBool;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_rules_engine::board::{find_best_move, GameState, SearchConfig, Strategy};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn position(fen: &str) -> GameState {
    GameState::try_from_fen(fen).unwrap()
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = GameState::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut kiwipete = position(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = GameState::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves()))
    });

    let mut middlegame = position(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_moves()))
    });

    let mut kiwipete = position(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_moves()))
    });

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    group.sample_size(10);

    let stop = AtomicBool::new(false);
    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::new("middlegame", strategy.name()),
            &strategy,
            |b, &strategy| {
                let mut state = position(MIDDLEGAME);
                let moves = state.generate_moves();
                let config = SearchConfig::strategy(strategy);
                let mut rng = StdRng::seed_from_u64(1);
                b.iter(|| find_best_move(&mut state, &moves, &config, &mut rng, &stop))
            },
        );
    }

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("alphabeta", depth), &depth, |b, &depth| {
            let mut state = GameState::new();
            let moves = state.generate_moves();
            let config = SearchConfig::strategy(Strategy::NegamaxAlphaBeta).with_depth(depth);
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| find_best_move(&mut state, &moves, &config, &mut rng, &stop))
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        ("middlegame", MIDDLEGAME),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let state = position(fen);
        group.bench_with_input(BenchmarkId::new("position", name), &state, |b, state| {
            b.iter(|| black_box(state.evaluate()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_strategies,
    bench_eval
);
criterion_main!(benches);
