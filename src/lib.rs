pub mod board;
pub mod engine;

pub use board::{Color, GameState, Move, Piece, Square};
pub use engine::EngineController;
