use std::fmt;
use std::ops::Not;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a side (player).
#[derive(PartialOrd, Ord, PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Side {
    Black,
    Red,
}

/// How many sides are there?
pub const NUM_SIDES: usize = 2;
/// List all sides
pub const ALL_SIDES: [Side; NUM_SIDES] = [Side::Black, Side::Red];

impl Side {
    /// Convert the `Side` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Which way does a man of this side travel along the rows?
    ///
    /// Black starts on the low rows and moves toward increasing row, Red does the opposite.
    ///
    /// ```
    /// use checkers::Side;
    ///
    /// assert_eq!(Side::Black.forward(), 1);
    /// assert_eq!(Side::Red.forward(), -1);
    /// ```
    #[inline]
    pub fn forward(&self) -> i32 {
        match *self {
            Side::Black => 1,
            Side::Red => -1,
        }
    }

    /// The row on which a man of this side is crowned, given the board width.
    #[inline]
    pub fn to_promotion_row(&self, width: usize) -> usize {
        match *self {
            Side::Black => width - 1,
            Side::Red => 0,
        }
    }
}

impl Not for Side {
    type Output = Side;

    /// Get the other side.
    #[inline]
    fn not(self) -> Side {
        if self == Side::Black {
            Side::Red
        } else {
            Side::Black
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Side::Black => write!(f, "Black"),
            Side::Red => write!(f, "Red"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_are_opposites() {
        assert_eq!(!Side::Black, Side::Red);
        assert_eq!(!!Side::Red, Side::Red);
    }

    #[test]
    fn promotion_rows_are_the_far_edges() {
        assert_eq!(Side::Black.to_promotion_row(8), 7);
        assert_eq!(Side::Red.to_promotion_row(8), 0);
        assert_eq!(Side::Black.to_promotion_row(12), 11);
    }

    #[test]
    fn indices_match_all_sides() {
        for (i, side) in ALL_SIDES.iter().enumerate() {
            assert_eq!(side.to_index(), i);
        }
    }
}
