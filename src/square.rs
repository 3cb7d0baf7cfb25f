use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a square on the checkers board as a `(row, col)` pair.
///
/// Squares order row-major: first by row, then by column.  A `Square` knows nothing about the
/// size of the board it is used on, so it may lie outside of it; the `Board` decides that.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square, given a row and a column.
    ///
    /// ```
    /// use checkers::Square;
    ///
    /// let sq = Square::new(2, 1);
    /// assert_eq!(sq.row(), 2);
    /// assert_eq!(sq.col(), 1);
    /// ```
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    /// Return the row of this square.
    #[inline]
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Return the column of this square.
    #[inline]
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Pieces may only ever stand on the dark squares, where `row + col` is odd.
    ///
    /// ```
    /// use checkers::Square;
    ///
    /// assert!(Square::new(0, 1).is_playable());
    /// assert!(!Square::new(0, 0).is_playable());
    /// ```
    #[inline]
    pub fn is_playable(&self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Move by a signed `(row, col)` delta.  Returns `None` only when a coordinate would leave
    /// the representable range; board bounds are checked by the `Board`.
    #[inline]
    pub fn offset(&self, rows: i32, cols: i32) -> Option<Square> {
        let row = self.row as i32 + rows;
        let col = self.col as i32 + cols;
        if row < 0 || col < 0 || row > u8::MAX as i32 || col > u8::MAX as i32 {
            None
        } else {
            Some(Square::new(row as u8, col as u8))
        }
    }

    /// The square halfway between two squares a jump apart.
    #[inline]
    pub fn midpoint(&self, other: Square) -> Square {
        Square::new(
            ((self.row as u16 + other.row as u16) / 2) as u8,
            ((self.col as u16 + other.col as u16) / 2) as u8,
        )
    }

    /// How many rows apart are these two squares?
    #[inline]
    pub fn row_distance(&self, other: Square) -> usize {
        (self.row as i32 - other.row as i32).abs() as usize
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Square {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
