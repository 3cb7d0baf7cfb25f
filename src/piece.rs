use crate::side::Side;
use crate::square::Square;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Identity of a piece for as long as it is in play.  Positions change, ids never do.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct PieceId(pub(crate) usize);

/// A checkers piece: an immutable side, a king flag that only ever turns on, and the square the
/// piece currently records for itself.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    side: Side,
    king: bool,
    square: Square,
}

impl Piece {
    /// Create a new piece.
    ///
    /// Panics if `square` is not a dark square.  Putting a piece anywhere else is a bug in the
    /// caller, not a bad move.
    ///
    /// ```
    /// use checkers::{Piece, Side, Square};
    ///
    /// let piece = Piece::new(Side::Black, Square::new(2, 1));
    /// assert!(!piece.is_king());
    /// ```
    pub fn new(side: Side, square: Square) -> Piece {
        assert!(
            square.is_playable(),
            "pieces may only stand on dark squares, not {}",
            square
        );
        Piece {
            side,
            king: false,
            square,
        }
    }

    /// Create a piece that is already a king.
    pub fn new_king(side: Side, square: Square) -> Piece {
        let mut piece = Piece::new(side, square);
        piece.king = true;
        piece
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.king
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    /// The row delta of non-capturing travel for a man.  Kings ignore it.
    #[inline]
    pub fn forward(&self) -> i32 {
        self.side.forward()
    }

    /// Only the `Board` moves pieces, so that the grid and the piece always agree.
    pub(crate) fn set_square(&mut self, square: Square) {
        assert!(
            square.is_playable(),
            "pieces may only stand on dark squares, not {}",
            square
        );
        self.square = square;
    }

    /// Crown this piece.  Returns `true` if it was not a king before.
    pub(crate) fn crown(&mut self) -> bool {
        let promoted = !self.king;
        self.king = true;
        promoted
    }

    /// A read-only copy of this piece for renderers and bots.
    #[inline]
    pub fn view(&self) -> PieceView {
        PieceView {
            side: self.side,
            king: self.king,
            square: self.square,
        }
    }
}

/// Read-only projection of a piece.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PieceView {
    pub side: Side,
    pub king: bool,
    pub square: Square,
}

impl fmt::Display for PieceView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match (self.side, self.king) {
            (Side::Black, false) => 'b',
            (Side::Black, true) => 'B',
            (Side::Red, false) => 'r',
            (Side::Red, true) => 'R',
        };
        write!(f, "|{}|", c)
    }
}
