use super::super::{Color, GameState, Move, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl GameState {
    /// Fixed-offset steps onto any square not held by a friendly piece.
    pub(crate) fn generate_step_moves(
        &self,
        from: Square,
        moved: (Color, Piece),
        offsets: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in offsets {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            let target = self.piece_at(to);
            if target.is_some_and(|(c, _)| c == moved.0) {
                continue;
            }
            moves.push(Move::new(from, to, moved, target, false, false));
        }
    }

    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, (color, Piece::Knight), &KNIGHT_OFFSETS, moves);
    }
}
