//! Move type.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// One state transition on the board.
///
/// A move records what it displaced so it can be undone without consulting
/// the board. For an en-passant capture `captured` holds the opposing pawn,
/// not the (empty) contents of the destination square.
///
/// Equality and hashing use only the `(from, to)` pair: promotion always
/// goes to a queen, so no two legal moves share coordinates.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: (Color, Piece),
    pub captured: Option<(Color, Piece)>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    /// Build a move from the pieces involved.
    ///
    /// Promotion is detected from the destination row. Castle and en-passant
    /// flags come from the generator, which is the only place that knows them.
    #[must_use]
    pub(crate) fn new(
        from: Square,
        to: Square,
        moved: (Color, Piece),
        captured: Option<(Color, Piece)>,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Self {
        let (color, piece) = moved;
        let is_promotion = piece == Piece::Pawn && to.row() == color.promotion_row();
        let captured = if is_en_passant {
            Some((color.opponent(), Piece::Pawn))
        } else {
            captured
        };
        Move {
            from,
            to,
            moved,
            captured,
            is_promotion,
            is_en_passant,
            is_castle,
        }
    }

    /// Stable identity derived from the coordinates.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u16 {
        (self.from.0 * 1000 + self.from.1 * 100 + self.to.0 * 10 + self.to.1) as u16
    }

    /// Returns true if this move removes an enemy piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.moved.0
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.moved.1
    }

    /// Kingside castles land the king on the g-file.
    #[inline]
    #[must_use]
    pub const fn is_kingside_castle(&self) -> bool {
        self.is_castle && self.to.1 > self.from.1
    }

    /// The piece that ends up on `to`.
    #[inline]
    #[must_use]
    pub const fn placed_piece(&self) -> (Color, Piece) {
        if self.is_promotion {
            (self.moved.0, Piece::Queen)
        } else {
            self.moved
        }
    }

    /// Square of the piece removed by this move, if any.
    ///
    /// Differs from `to` only for en passant, where the captured pawn sits
    /// beside the moving pawn's start square.
    #[must_use]
    pub const fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square(self.from.0, self.to.1)
        } else {
            self.to
        }
    }

    /// Coordinate notation used in the move log ("e2e4").
    #[must_use]
    pub fn chess_notation(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_flags() {
        let a = Move::new(
            Square(6, 4),
            Square(4, 4),
            (Color::White, Piece::Pawn),
            None,
            false,
            false,
        );
        let mut b = a;
        b.is_castle = true;
        assert_eq!(a, b);
        assert_eq!(a.id(), 6444);
        assert_eq!(a.to_string(), "e2e4");
    }

    #[test]
    fn test_en_passant_synthesizes_captured_pawn() {
        let mv = Move::new(
            Square(3, 4),
            Square(2, 3),
            (Color::White, Piece::Pawn),
            None,
            true,
            false,
        );
        assert_eq!(mv.captured, Some((Color::Black, Piece::Pawn)));
        assert!(mv.is_capture());
        assert_eq!(mv.capture_square(), Square(3, 3));
    }

    #[test]
    fn test_promotion_detected_from_row() {
        let white = Move::new(
            Square(1, 0),
            Square(0, 0),
            (Color::White, Piece::Pawn),
            None,
            false,
            false,
        );
        assert!(white.is_promotion);
        assert_eq!(white.placed_piece(), (Color::White, Piece::Queen));

        let black = Move::new(
            Square(6, 0),
            Square(7, 1),
            (Color::Black, Piece::Pawn),
            Some((Color::White, Piece::Knight)),
            false,
            false,
        );
        assert!(black.is_promotion);
        assert!(black.is_capture());
    }
}
