//! Property-based tests using proptest.

use crate::board::{
    find_best_move, Color, GameState, Move, SearchConfig, Strategy as SearchStrategy,
};
use proptest::prelude::*;
use rand::prelude::*;
use std::sync::atomic::AtomicBool;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl proptest::strategy::Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl proptest::strategy::Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, returning the moves played.
fn random_playout(state: &mut GameState, rng: &mut StdRng, num_moves: usize) -> Vec<Move> {
    let mut played = Vec::new();
    for _ in 0..num_moves {
        let moves = state.generate_moves();
        let Some(mv) = moves.choose(rng).copied() else {
            break;
        };
        state.make_move(&mv);
        played.push(mv);
    }
    played
}

proptest! {
    /// Property: make_move followed by undo_move restores the position exactly
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial = state.snapshot();
        let initial_fen = state.to_fen();

        let played = random_playout(&mut state, &mut rng, num_moves);
        prop_assert_eq!(state.move_log().len(), played.len());
        prop_assert_eq!(state.en_passant_log().len(), played.len() + 1);
        prop_assert_eq!(state.castle_rights_log().len(), played.len() + 1);

        for _ in 0..played.len() {
            prop_assert!(state.undo_move());
        }

        prop_assert_eq!(state.snapshot(), initial);
        prop_assert_eq!(state.to_fen(), initial_fen);
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut state, &mut rng, num_moves);

        let mover = state.side_to_move();
        for mv in state.generate_moves() {
            state.make_move(&mv);
            prop_assert!(!state.is_king_attacked(mover), "{} leaves king in check", mv);
            state.undo_move();
        }
    }

    /// Property: the king-square cache matches the board
    #[test]
    fn prop_king_cache_matches_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut state, &mut rng, num_moves);

        for color in Color::BOTH {
            let sq = state.king_square(color);
            prop_assert_eq!(state.piece_at(sq), Some((color, crate::board::Piece::King)));
        }
    }

    /// Property: FEN output parses back to the same position
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut state, &mut rng, num_moves);

        let fen = state.to_fen();
        let parsed = GameState::try_from_fen(&fen).unwrap();
        prop_assert_eq!(parsed.snapshot(), state.snapshot());
    }

    /// Property: negamax and alpha-beta agree on the score after random play
    #[test]
    fn prop_alphabeta_matches_negamax(seed in seed_strategy(), num_moves in 1..=12usize) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut state, &mut rng, num_moves);

        let moves = state.generate_moves();
        prop_assume!(!moves.is_empty());
        let stop = AtomicBool::new(false);

        let plain = find_best_move(
            &mut state,
            &moves,
            &SearchConfig::strategy(SearchStrategy::Negamax),
            &mut rng,
            &stop,
        );
        let pruned = find_best_move(
            &mut state,
            &moves,
            &SearchConfig::strategy(SearchStrategy::NegamaxAlphaBeta),
            &mut rng,
            &stop,
        );
        prop_assert_eq!(plain.score, pruned.score);
    }
}
