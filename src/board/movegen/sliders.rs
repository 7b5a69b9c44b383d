use super::super::{Color, GameState, Move, Piece, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

impl GameState {
    /// Ray-cast along each direction until the edge, a friendly piece
    /// (excluded) or an enemy piece (included, then stop).
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        moved: (Color, Piece),
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, moved, None, false, false)),
                    Some(target) => {
                        if target.0 != moved.0 {
                            moves.push(Move::new(from, to, moved, Some(target), false, false));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }

    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut Vec<Move>,
    ) {
        let moved = (color, piece);
        if matches!(piece, Piece::Rook | Piece::Queen) {
            self.generate_sliding_moves(from, moved, &ROOK_DIRECTIONS, moves);
        }
        if matches!(piece, Piece::Bishop | Piece::Queen) {
            self.generate_sliding_moves(from, moved, &BISHOP_DIRECTIONS, moves);
        }
    }
}
