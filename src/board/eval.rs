use super::pst;
use super::{Color, GameState, Piece, Square};

/// Score of a checkmate, in tenths of a pawn.
///
/// Larger than any material plus positional total a legal position can reach.
pub const CHECKMATE: i32 = 10_000;
pub const STALEMATE: i32 = 0;

/// Scores are kept in tenths of a pawn so the positional weight of 0.3
/// becomes an exact integer factor.
const MATERIAL_SCALE: i32 = 10;
const POSITIONAL_WEIGHT: i32 = 3;

fn positional_value(color: Color, piece: Piece, sq: Square) -> i32 {
    let table = match (piece, color) {
        (Piece::Pawn, Color::White) => &pst::WHITE_PAWN,
        (Piece::Pawn, Color::Black) => &pst::BLACK_PAWN,
        (Piece::Knight, _) => &pst::KNIGHT,
        (Piece::Bishop, _) => &pst::BISHOP,
        (Piece::Rook, _) => &pst::ROOK,
        (Piece::Queen, _) => &pst::QUEEN,
        (Piece::King, _) => return 0,
    };
    table[sq.0][sq.1]
}

impl GameState {
    /// Static evaluation from White's point of view.
    ///
    /// Reads the terminal flags left by the last `generate_moves` call: a
    /// mated side to move scores `-CHECKMATE` for White to move and
    /// `CHECKMATE` for Black to move, stalemate scores zero.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.checkmate {
            return if self.white_to_move {
                -CHECKMATE
            } else {
                CHECKMATE
            };
        }
        if self.stalemate {
            return STALEMATE;
        }

        let mut score = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                let value = piece.value() * MATERIAL_SCALE
                    + positional_value(color, piece, sq) * POSITIONAL_WEIGHT;
                score += color.sign() * value;
            }
        }
        score
    }

    /// Material balance in whole pawns, White positive.
    #[must_use]
    pub fn score_material(&self) -> i32 {
        Square::all()
            .filter_map(|sq| self.piece_at(sq))
            .map(|(color, piece)| color.sign() * piece.value())
            .sum()
    }
}
