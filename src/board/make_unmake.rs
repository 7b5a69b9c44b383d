use log::debug;

use super::{Color, GameState, Move, Piece, Square};

/// Rook start and end squares for a castle move.
#[inline]
fn castle_rook_squares(m: &Move) -> (Square, Square) {
    let row = m.to.0;
    if m.is_kingside_castle() {
        (Square(row, 7), Square(row, 5))
    } else {
        (Square(row, 0), Square(row, 3))
    }
}

impl GameState {
    /// Apply a move drawn from the most recent `generate_moves` result.
    ///
    /// The move is not validated; passing anything else leaves the state
    /// undefined.
    pub fn make_move(&mut self, m: &Move) {
        let (color, piece) = m.moved;

        self.set_piece(m.from, None);
        if m.is_en_passant {
            self.set_piece(m.capture_square(), None);
        }
        self.set_piece(m.to, Some(m.placed_piece()));

        if piece == Piece::King {
            self.set_king_square(color, m.to);
        }

        if m.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(m);
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        self.en_passant_target = if piece == Piece::Pawn && m.from.0.abs_diff(m.to.0) == 2 {
            Some(Square((m.from.0 + m.to.0) / 2, m.from.1))
        } else {
            None
        };

        self.update_castling_rights(m);

        self.move_log.push(*m);
        self.en_passant_log.push(self.en_passant_target);
        self.castle_rights_log.push(self.castling_rights);
        self.white_to_move = !self.white_to_move;
    }

    /// Revoke rights lost by this move: the king moving, a rook leaving its
    /// home square, or a rook being captured on its home square.
    fn update_castling_rights(&mut self, m: &Move) {
        let (color, piece) = m.moved;
        match piece {
            Piece::King => self.castling_rights.remove_both(color),
            Piece::Rook => self.revoke_rook_right(color, m.from),
            _ => {}
        }

        if let Some((captured_color, Piece::Rook)) = m.captured {
            self.revoke_rook_right(captured_color, m.to);
        }
    }

    fn revoke_rook_right(&mut self, color: Color, sq: Square) {
        if sq.0 != color.back_row() {
            return;
        }
        match sq.1 {
            0 => self.castling_rights.remove(color, false),
            7 => self.castling_rights.remove(color, true),
            _ => {}
        }
    }

    /// Take back the last move.
    ///
    /// Returns `false` (and changes nothing) when the log is empty.
    pub fn undo_move(&mut self) -> bool {
        let Some(m) = self.move_log.pop() else {
            debug!("nothing to undo");
            return false;
        };

        self.set_piece(m.from, Some(m.moved));
        self.set_piece(m.to, None);
        if let Some(captured) = m.captured {
            self.set_piece(m.capture_square(), Some(captured));
        }

        if m.piece() == Piece::King {
            self.set_king_square(m.color(), m.from);
        }

        if m.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&m);
            let rook = self.piece_at(rook_to);
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, rook);
        }

        self.en_passant_log.pop();
        self.castle_rights_log.pop();
        self.en_passant_target = self.en_passant_log.last().copied().flatten();
        self.castling_rights = self.castle_rights_log.last().copied().unwrap_or_default();

        self.white_to_move = !self.white_to_move;
        self.checkmate = false;
        self.stalemate = false;
        true
    }
}
