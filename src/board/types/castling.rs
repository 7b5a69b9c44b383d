//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Four independent castling permissions (king-side/queen-side for each color).
///
/// A `Copy` value, so every log entry is a snapshot rather than an alias of
/// the live rights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_both(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    #[must_use]
    pub const fn white_kingside(self) -> bool {
        self.has(Color::White, true)
    }

    #[inline]
    #[must_use]
    pub const fn white_queenside(self) -> bool {
        self.has(Color::White, false)
    }

    #[inline]
    #[must_use]
    pub const fn black_kingside(self) -> bool {
        self.has(Color::Black, true)
    }

    #[inline]
    #[must_use]
    pub const fn black_queenside(self) -> bool {
        self.has(Color::Black, false)
    }

    /// FEN castling field ("KQkq", "-" when empty)
    #[must_use]
    pub fn to_fen_field(self) -> String {
        let mut s = String::new();
        if self.white_kingside() {
            s.push('K');
        }
        if self.white_queenside() {
            s.push('Q');
        }
        if self.black_kingside() {
            s.push('k');
        }
        if self.black_queenside() {
            s.push('q');
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}
