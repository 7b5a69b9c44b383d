use super::super::{Color, GameState, Move, Piece, Square};
use super::knights::KNIGHT_OFFSETS;
use super::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl GameState {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, (color, Piece::King), &KING_OFFSETS, moves);
    }

    /// Castle moves for the side to move.
    ///
    /// Requires the right, a rook on its home square, empty squares between
    /// king and rook, and no attack on the king's start, transit or landing
    /// square.
    pub(crate) fn generate_castle_moves(&self, moves: &mut Vec<Move>) {
        let color = self.side_to_move();
        let enemy = color.opponent();
        let row = color.back_row();
        let king_sq = self.king_square(color);

        if king_sq != Square(row, 4) || self.is_square_attacked(king_sq, enemy) {
            return;
        }

        let rook = Some((color, Piece::Rook));
        let king = (color, Piece::King);

        if self.castling_rights.has(color, true)
            && self.piece_at(Square(row, 7)) == rook
            && self.is_empty(Square(row, 5))
            && self.is_empty(Square(row, 6))
            && !self.is_square_attacked(Square(row, 5), enemy)
            && !self.is_square_attacked(Square(row, 6), enemy)
        {
            moves.push(Move::new(king_sq, Square(row, 6), king, None, false, true));
        }

        if self.castling_rights.has(color, false)
            && self.piece_at(Square(row, 0)) == rook
            && self.is_empty(Square(row, 1))
            && self.is_empty(Square(row, 2))
            && self.is_empty(Square(row, 3))
            && !self.is_square_attacked(Square(row, 3), enemy)
            && !self.is_square_attacked(Square(row, 2), enemy)
        {
            moves.push(Move::new(king_sq, Square(row, 2), king, None, false, true));
        }
    }

    /// Whether any piece of `attacker` could capture on `square`.
    ///
    /// Scans outward from the target instead of generating the attacker's
    /// full move list. For an occupied square this agrees with "some
    /// pseudo-legal attacker move lands here"; for an empty square it also
    /// counts pawn diagonals, which castling needs.
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let dir = attacker.pawn_direction();
        for dc in [-1, 1] {
            if let Some(sq) = square.offset(-dir, dc) {
                if self.piece_at(sq) == Some((attacker, Piece::Pawn)) {
                    return true;
                }
            }
        }

        let hits = |offsets: &[(isize, isize)], piece: Piece| {
            offsets.iter().any(|&(dr, dc)| {
                square
                    .offset(dr, dc)
                    .is_some_and(|sq| self.piece_at(sq) == Some((attacker, piece)))
            })
        };
        if hits(&KNIGHT_OFFSETS, Piece::Knight) || hits(&KING_OFFSETS, Piece::King) {
            return true;
        }

        self.ray_attacked(square, attacker, &ROOK_DIRECTIONS, Piece::Rook)
            || self.ray_attacked(square, attacker, &BISHOP_DIRECTIONS, Piece::Bishop)
    }

    fn ray_attacked(
        &self,
        square: Square,
        attacker: Color,
        directions: &[(isize, isize)],
        slider: Piece,
    ) -> bool {
        for &(dr, dc) in directions {
            let mut current = square;
            while let Some(sq) = current.offset(dr, dc) {
                if let Some((color, piece)) = self.piece_at(sq) {
                    if color == attacker && (piece == slider || piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
                current = sq;
            }
        }
        false
    }

    /// Whether `color`'s king is attacked.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move())
    }
}
