use crate::side::Side;
use crate::square::Square;

/// One of the four diagonals.  Row 0 is drawn at the top of the board, so `Down` means toward
/// increasing row.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// How many directions are there?
pub const NUM_DIRECTIONS: usize = 4;

/// Enumerate all directions
pub const ALL_DIRECTIONS: [Direction; NUM_DIRECTIONS] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

impl Direction {
    /// The two diagonals a man of `side` may travel along.
    ///
    /// ```
    /// use checkers::{Direction, Side};
    ///
    /// assert_eq!(Direction::forward(Side::Black), [Direction::DownLeft, Direction::DownRight]);
    /// ```
    #[inline]
    pub fn forward(side: Side) -> [Direction; 2] {
        match side {
            Side::Black => [Direction::DownLeft, Direction::DownRight],
            Side::Red => [Direction::UpLeft, Direction::UpRight],
        }
    }

    #[inline]
    pub fn row_delta(&self) -> i32 {
        match *self {
            Direction::UpLeft | Direction::UpRight => -1,
            Direction::DownLeft | Direction::DownRight => 1,
        }
    }

    #[inline]
    pub fn col_delta(&self) -> i32 {
        match *self {
            Direction::UpLeft | Direction::DownLeft => -1,
            Direction::UpRight | Direction::DownRight => 1,
        }
    }

    /// Walk `distance` squares from `sq` in this direction.  The result is not bounds checked
    /// against any board.
    #[inline]
    pub fn walk(&self, sq: Square, distance: i32) -> Option<Square> {
        sq.offset(self.row_delta() * distance, self.col_delta() * distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_matches_side_direction() {
        for side in [Side::Black, Side::Red].iter() {
            for dir in Direction::forward(*side).iter() {
                assert_eq!(dir.row_delta(), side.forward());
            }
        }
    }

    #[test]
    fn walking_two_lands_beyond_the_neighbor() {
        let sq = Square::new(2, 1);
        assert_eq!(Direction::DownRight.walk(sq, 1), Some(Square::new(3, 2)));
        assert_eq!(Direction::DownRight.walk(sq, 2), Some(Square::new(4, 3)));
        assert_eq!(Direction::UpLeft.walk(sq, 2), None);
    }
}
