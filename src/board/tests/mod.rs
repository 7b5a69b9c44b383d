//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-tree counts for move generation correctness
//! - `make_unmake.rs` - Make/undo correctness and the snapshot logs
//! - `rules.rs` - Castling, en passant, promotion, checkmate, stalemate
//! - `fen.rs` - Position I/O and move parsing
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Strategy behaviour, fallback and cancellation
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod proptest;

use crate::board::{GameState, Move, Square};

/// Parse a FEN that the test knows to be valid.
pub(super) fn position(fen: &str) -> GameState {
    GameState::try_from_fen(fen).unwrap()
}

/// The legal move from `from` to `to`, panicking if there is none.
pub(super) fn find_move(state: &mut GameState, from: &str, to: &str) -> Move {
    let from: Square = from.parse().unwrap();
    let to: Square = to.parse().unwrap();
    state
        .generate_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .unwrap_or_else(|| panic!("expected move {from}{to} not found"))
}

/// Play a sequence of coordinate moves, each of which must be legal.
pub(super) fn play(state: &mut GameState, moves: &[&str]) {
    for notation in moves {
        let mv = state.parse_move(notation).unwrap();
        state.make_move(&mv);
    }
}

pub(super) fn has_move(state: &mut GameState, notation: &str) -> bool {
    state
        .generate_moves()
        .iter()
        .any(|m| m.to_string() == notation)
}
