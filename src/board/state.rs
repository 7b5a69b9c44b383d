use super::{CastlingRights, Cell, Color, Move, Piece, Square};

/// Full state of one game: the 8x8 grid plus everything needed to undo.
///
/// `en_passant_log` and `castle_rights_log` always hold one more entry than
/// `move_log`: entry `i` is the snapshot in force before move `i` was made,
/// and the last entry mirrors the live value.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: [[Cell; 8]; 8],
    pub(crate) white_to_move: bool,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) move_log: Vec<Move>,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) castle_rights_log: Vec<CastlingRights>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

/// Comparable copy of everything undo must restore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub board: [[Cell; 8]; 8],
    pub white_to_move: bool,
    pub white_king: Square,
    pub black_king: Square,
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl GameState {
    /// Standard initial position, full castling rights, empty logs.
    pub fn new() -> Self {
        let mut state = GameState::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            state.set_piece(Square(0, col), Some((Color::Black, *piece)));
            state.set_piece(Square(1, col), Some((Color::Black, Piece::Pawn)));
            state.set_piece(Square(6, col), Some((Color::White, Piece::Pawn)));
            state.set_piece(Square(7, col), Some((Color::White, *piece)));
        }
        state.white_king = Square(7, 4);
        state.black_king = Square(0, 4);
        state.castling_rights = CastlingRights::all();
        state.reset_logs();
        state
    }

    pub(crate) fn empty() -> Self {
        GameState {
            board: [[None; 8]; 8],
            white_to_move: true,
            white_king: Square(7, 4),
            black_king: Square(0, 4),
            move_log: Vec::new(),
            en_passant_target: None,
            en_passant_log: vec![None],
            castling_rights: CastlingRights::none(),
            castle_rights_log: vec![CastlingRights::none()],
            checkmate: false,
            stalemate: false,
        }
    }

    /// Seed both snapshot logs from the live values and clear the move log.
    pub(crate) fn reset_logs(&mut self) {
        self.move_log.clear();
        self.en_passant_log = vec![self.en_passant_target];
        self.castle_rights_log = vec![self.castling_rights];
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Discard everything and start again from the initial position.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// Contents of a square; `None` for an empty or off-board square.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.board
            .get(sq.0)
            .and_then(|row| row.get(sq.1))
            .copied()
            .flatten()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, cell: Cell) {
        if let Some(slot) = self.board.get_mut(sq.0).and_then(|row| row.get_mut(sq.1)) {
            *slot = cell;
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Read-only view of the grid, row 0 first.
    #[must_use]
    pub fn board(&self) -> &[[Cell; 8]; 8] {
        &self.board
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn en_passant_log(&self) -> &[Option<Square>] {
        &self.en_passant_log
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn castle_rights_log(&self) -> &[CastlingRights] {
        &self.castle_rights_log
    }

    /// Set by the last call to `generate_moves`.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Set by the last call to `generate_moves`.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }

    #[must_use]
    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            board: self.board,
            white_to_move: self.white_to_move,
            white_king: self.white_king,
            black_king: self.black_king,
            en_passant_target: self.en_passant_target,
            castling_rights: self.castling_rights,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
