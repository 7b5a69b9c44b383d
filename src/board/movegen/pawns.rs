use super::super::{Color, GameState, Move, Piece, Square};

impl GameState {
    /// Single and double pushes, diagonal captures, and en passant.
    ///
    /// Promotion is implied by the destination row and always yields a queen.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let moved = (color, Piece::Pawn);
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.push(Move::new(from, one, moved, None, false, false));
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two, moved, None, false, false));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.piece_at(target) {
                Some(captured) if captured.0 != color => {
                    moves.push(Move::new(from, target, moved, Some(captured), false, false));
                }
                None if self.en_passant_target == Some(target) => {
                    moves.push(Move::new(from, target, moved, None, true, false));
                }
                _ => {}
            }
        }
    }
}
