use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{CastlingRights, Color, GameState, Move, Piece, Square};

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Only the first four fields are read; move clocks are ignored. The
    /// logs start fresh, seeded from the parsed en-passant target and
    /// castling rights.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut state = GameState::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { ranks: ranks.len() });
        }

        let mut kings = [Vec::new(), Vec::new()];
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if col >= 8 {
                    return Err(FenError::InvalidFileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                if piece == Piece::King {
                    kings[color.index()].push(Square(row, col));
                }
                state.set_piece(Square(row, col), Some((color, piece)));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        for color in Color::BOTH {
            let found = &kings[color.index()];
            if found.len() != 1 {
                return Err(FenError::KingCount {
                    color: color.to_string(),
                    count: found.len(),
                });
            }
            state.set_king_square(color, found[0]);
        }

        state.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        state.castling_rights = rights;

        state.en_passant_target = match parts[3] {
            "-" => None,
            field => {
                let invalid = || FenError::InvalidEnPassant {
                    found: field.to_string(),
                };
                let target = field.parse::<Square>().map_err(|_| invalid())?;
                if !state.is_en_passant_target(target) {
                    return Err(invalid());
                }
                Some(target)
            }
        };

        state.reset_logs();
        Ok(state)
    }

    /// Whether `target` is the square skipped by an enemy double pawn push:
    /// on the right row for the side to move, empty, with the pushed pawn
    /// directly beyond it.
    fn is_en_passant_target(&self, target: Square) -> bool {
        let enemy = self.side_to_move().opponent();
        let dir = enemy.pawn_direction();
        let row_ok = target.0 as isize == enemy.pawn_start_row() as isize + dir;
        row_ok
            && self.is_empty(target)
            && target
                .offset(dir, 0)
                .is_some_and(|sq| self.piece_at(sq) == Some((enemy, Piece::Pawn)))
    }

    /// Convert the position to FEN notation. Move clocks are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in &self.board {
            let mut out = String::new();
            let mut empty = 0;
            for cell in row {
                match cell {
                    Some((color, piece)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char(*color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 1",
            rows.join("/"),
            active,
            self.castling_rights.to_fen_field(),
            ep
        )
    }

    /// Resolve coordinate notation ("e2e4") against the current legal moves.
    ///
    /// A trailing `q` is accepted on promotions; pawns always promote to a
    /// queen, so any other suffix is rejected.
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let len = notation.chars().count();
        if !(4..=5).contains(&len) || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;
        let suffix = &notation[4..];

        let illegal = || MoveParseError::IllegalMove {
            notation: notation.to_string(),
        };
        let mv = self
            .generate_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to)
            .ok_or_else(illegal)?;

        match suffix {
            "" => Ok(mv),
            "q" | "Q" if mv.is_promotion => Ok(mv),
            _ => Err(illegal()),
        }
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::try_from_fen(s)
    }
}
