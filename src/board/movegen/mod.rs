mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{GameState, Move, Piece, Square};

impl GameState {
    /// Every move of the side to move, ignoring whether it leaves the
    /// mover's own king in check. Castling is not included.
    pub fn generate_pseudo_moves(&self) -> Vec<Move> {
        let color = self.side_to_move();
        let mut moves = Vec::with_capacity(48);

        for from in Square::all() {
            let Some((piece_color, piece)) = self.piece_at(from) else {
                continue;
            };
            if piece_color != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
                p if p.is_slider() => self.generate_slider_moves(from, color, p, &mut moves),
                Piece::King => self.generate_king_moves(from, color, &mut moves),
                _ => {}
            }
        }
        moves
    }

    /// Legal moves for the side to move.
    ///
    /// Each pseudo-legal move is made, tested for self-check and undone.
    /// Also records checkmate/stalemate when the result is empty.
    pub fn generate_moves(&mut self) -> Vec<Move> {
        let saved_en_passant = self.en_passant_target;
        let saved_rights = self.castling_rights;
        let mover = self.side_to_move();

        let mut moves = self.generate_pseudo_moves();
        self.generate_castle_moves(&mut moves);

        moves.retain(|m| {
            self.make_move(m);
            let legal = !self.is_king_attacked(mover);
            self.undo_move();
            legal
        });

        if moves.is_empty() {
            let in_check = self.is_king_attacked(mover);
            self.checkmate = in_check;
            self.stalemate = !in_check;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        self.en_passant_target = saved_en_passant;
        self.castling_rights = saved_rights;
        moves
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
