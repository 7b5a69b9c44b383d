//! Chess rules and move selection.
//!
//! An 8x8 grid of optional pieces with row 0 at Black's back rank. Supports
//! full chess rules including castling, en passant, and promotion (always
//! to a queen).
//!
//! # Example
//! ```
//! use chess_rules_engine::board::GameState;
//!
//! let mut state = GameState::new();
//! let moves = state.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError, StrategyError};
pub use eval::{CHECKMATE, STALEMATE};
pub use state::{GameState, PositionSnapshot};
pub use types::{CastlingRights, Cell, Color, Move, Piece, Square};

pub use search::{
    find_best_move, send_best_move, NodeCounters, SearchConfig, SearchResult, Strategy,
    DEFAULT_DEPTH, INFINITY,
};
