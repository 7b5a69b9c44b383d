//! Search tests to verify each strategy finds sensible moves.

use std::sync::atomic::AtomicBool;

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_rules_engine::board::{
    find_best_move, GameState, SearchConfig, SearchResult, Strategy, CHECKMATE,
};

fn run(fen: &str, config: SearchConfig, seed: u64) -> SearchResult {
    let mut state = GameState::try_from_fen(fen).unwrap();
    let moves = state.generate_moves();
    let mut rng = StdRng::seed_from_u64(seed);
    let stop = AtomicBool::new(false);
    find_best_move(&mut state, &moves, &config, &mut rng, &stop)
}

fn best(result: &SearchResult) -> String {
    result.best_move.map(|m| m.to_string()).unwrap_or_default()
}

/// Test that every searching strategy finds Qxf7# (scholar's mate)
#[test]
fn finds_scholars_mate() {
    let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4";
    for strategy in Strategy::ALL.into_iter().filter(|s| *s != Strategy::Random) {
        let result = run(fen, SearchConfig::strategy(strategy), 17);
        assert_eq!(best(&result), "h5f7", "{strategy}");
        assert_eq!(result.score, Some(CHECKMATE), "{strategy}");
    }
}

/// Three plies see a mate in two that two plies cannot
#[test]
fn finds_mate_in_two_at_depth_three() {
    // 1. Re8+ Rxe8 2. Rxe8#
    let fen = "r5k1/5ppp/8/8/8/8/4R3/4R1K1 w - - 0 1";
    let shallow = run(fen, SearchConfig::strategy(Strategy::NegamaxAlphaBeta), 3);
    assert!(shallow.score < Some(CHECKMATE));

    for strategy in [Strategy::Negamax, Strategy::NegamaxAlphaBeta, Strategy::Minimax] {
        let result = run(fen, SearchConfig::strategy(strategy).with_depth(3), 3);
        assert_eq!(best(&result), "e2e8", "{strategy}");
        assert_eq!(result.score, Some(CHECKMATE), "{strategy}");
    }
}

/// Test that the engine avoids giving away its queen
#[test]
fn avoids_hanging_queen() {
    // Both pawns cover d5.
    let fen = "4k3/8/2p1p3/8/8/8/8/3QK3 w - - 0 1";
    for strategy in [
        Strategy::MinimaxIterative,
        Strategy::Minimax,
        Strategy::Negamax,
        Strategy::NegamaxAlphaBeta,
    ] {
        for seed in 0..3 {
            let result = run(fen, SearchConfig::strategy(strategy), seed);
            let mv = best(&result);
            assert_ne!(mv, "d1d5", "{strategy}");
        }
    }
}

/// Alpha-beta returns the negamax score while visiting fewer nodes
#[test]
fn alphabeta_prunes_without_changing_score() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let plain = run(fen, SearchConfig::strategy(Strategy::Negamax), 1);
    let pruned = run(fen, SearchConfig::strategy(Strategy::NegamaxAlphaBeta), 2);
    assert_eq!(plain.score, pruned.score);
    assert!(pruned.nodes < plain.nodes);
}

/// The two depth-2 minimax forms agree on the value of the best move
#[test]
fn iterative_and_recursive_minimax_agree_on_score() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "4k3/8/3p4/4p3/8/8/8/4QK2 w - - 0 1",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
    ] {
        let iterative = run(fen, SearchConfig::strategy(Strategy::MinimaxIterative), 4);
        let recursive = run(fen, SearchConfig::strategy(Strategy::Minimax), 5);
        assert_eq!(iterative.score, recursive.score, "{fen}");
    }
}
