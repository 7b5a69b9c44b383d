//! Core chess types.
//!
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` - one state transition
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

/// Contents of one board square.
pub type Cell = Option<(Color, Piece)>;
