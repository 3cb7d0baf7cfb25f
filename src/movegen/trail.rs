use crate::board::Board;
use crate::direction::Direction;
use crate::movegen::piece_type::PieceType;
use crate::side::Side;
use crate::square::Square;

use std::cmp::Ordering;

/// A maximal capture chain: the landing square of every hop, in order.  The starting square is
/// not part of the trail, and a trail always holds at least one hop.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Trail {
    landings: Vec<Square>,
}

impl Trail {
    /// Every landing square, in the order they are reached.
    #[inline]
    pub fn landings(&self) -> &[Square] {
        &self.landings
    }

    /// Where the piece ends up.
    #[inline]
    pub fn dest(&self) -> Square {
        self.landings[self.landings.len() - 1]
    }

    /// How many pieces this trail captures.
    #[inline]
    pub fn len(&self) -> usize {
        self.landings.len()
    }

    /// The squares jumped over, given where the trail started.
    pub fn captures(&self, origin: Square) -> Vec<Square> {
        let mut from = origin;
        let mut result = Vec::with_capacity(self.landings.len());
        for landing in self.landings.iter() {
            result.push(from.midpoint(*landing));
            from = *landing;
        }
        result
    }
}

/// One hop of a chain in progress.
struct Frame {
    at: Square,
    landings: Vec<Square>,
    captured: Vec<Square>,
}

/// Try to hop from `from` along `dir` for a piece of `side` that started the turn on `origin`.
///
/// A hop needs an opposing piece on the neighboring square that has not already been jumped in
/// this chain, and an empty square right behind it.  `origin` counts as empty, because the
/// moving piece has left it.  Returns the jumped square and the landing square.
#[inline]
fn hop(
    board: &Board,
    origin: Square,
    side: Side,
    from: Square,
    dir: Direction,
    captured: &[Square],
) -> Option<(Square, Square)> {
    let over = board.step(from, dir, 1)?;
    let land = board.step(from, dir, 2)?;

    let jumpable = match board.get(over) {
        Some(piece) => piece.side() != side && !captured.contains(&over),
        None => false,
    };
    if jumpable && (board.is_empty(land) || land == origin) {
        Some((over, land))
    } else {
        None
    }
}

/// Can a piece of this type and `side` standing on `square` capture anything right now?
///
/// This only looks one hop deep, which is all it takes to decide whether capturing is forced.
pub fn can_jump<T: PieceType>(board: &Board, square: Square, side: Side) -> bool {
    T::directions(side)
        .iter()
        .any(|dir| hop(board, square, side, square, *dir, &[]).is_some())
}

/// Enumerate every maximal capture chain for a piece of this type and `side` starting on
/// `origin`.
///
/// The search is a depth-first walk with an explicit stack.  Each frame owns the landings so
/// far and the squares already jumped, so no two branches share state.  A branch ends when no
/// further hop is possible, or when it closes a loop back onto `origin`.  The piece keeps the
/// movement of its type for the whole chain, so a man that reaches the far row mid-chain keeps
/// hopping as a man.
///
/// Every hop removes a distinct opposing piece from consideration, so no chain is longer than
/// the number of opposing pieces.
pub fn jump_trails<T: PieceType>(board: &Board, origin: Square, side: Side) -> Vec<Trail> {
    let directions = T::directions(side);
    let max_depth = board.count(!side);
    let mut trails = vec![];

    let mut stack = vec![Frame {
        at: origin,
        landings: vec![],
        captured: vec![],
    }];

    while let Some(frame) = stack.pop() {
        let closed_loop = frame.at == origin && !frame.landings.is_empty();
        let mut extended = false;

        if !closed_loop {
            debug_assert!(frame.captured.len() <= max_depth);
            // Reverse so that branches come off the stack in direction order.
            for dir in directions.iter().rev() {
                if let Some((over, land)) =
                    hop(board, origin, side, frame.at, *dir, &frame.captured)
                {
                    let mut landings = frame.landings.clone();
                    landings.push(land);
                    let mut captured = frame.captured.clone();
                    captured.push(over);
                    stack.push(Frame {
                        at: land,
                        landings,
                        captured,
                    });
                    extended = true;
                }
            }
        }

        if !extended && !frame.landings.is_empty() {
            trails.push(Trail {
                landings: frame.landings,
            });
        }
    }

    trails
}

/// Order trails by preference: more captures first, then the lexicographically smallest
/// sequence of landing squares.
#[inline]
fn preference(a: &Trail, b: &Trail) -> Ordering {
    b.len()
        .cmp(&a.len())
        .then_with(|| a.landings.cmp(&b.landings))
}

/// Out of `trails`, pick the one to play when the piece is told to go to `dest`.
pub fn select_trail(trails: Vec<Trail>, dest: Square) -> Option<Trail> {
    trails
        .into_iter()
        .filter(|trail| trail.dest() == dest)
        .min_by(preference)
}

/// Reconstruct the capture chain a piece of this type on `origin` plays to reach `dest`.
pub fn find_trail<T: PieceType>(
    board: &Board,
    origin: Square,
    side: Side,
    dest: Square,
) -> Option<Trail> {
    select_trail(jump_trails::<T>(board, origin, side), dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_builder::BoardBuilder;
    use crate::movegen::piece_type::{KingType, ManType};
    use std::convert::TryFrom;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn board(black: &[Square], red: &[Square], kings: &[Square]) -> Board {
        let mut builder = BoardBuilder::new();
        for s in black.iter() {
            builder.piece(*s, Side::Black);
        }
        for s in red.iter() {
            builder.piece(*s, Side::Red);
        }
        for s in kings.iter() {
            let (side, _) = builder.get(*s).expect("kings are listed as pieces too");
            builder.king(*s, side);
        }
        Board::try_from(&builder).expect("valid test position")
    }

    fn endpoints(trails: &[Trail]) -> Vec<Square> {
        let mut result: Vec<Square> = trails.iter().map(|t| t.dest()).collect();
        result.sort();
        result
    }

    #[test]
    fn single_hop() {
        let board = board(&[sq(2, 1)], &[sq(3, 2)], &[]);
        assert!(can_jump::<ManType>(&board, sq(2, 1), Side::Black));
        let trails = jump_trails::<ManType>(&board, sq(2, 1), Side::Black);
        assert_eq!(trails.len(), 1);
        assert_eq!(trails[0].landings(), &[sq(4, 3)]);
        assert_eq!(trails[0].captures(sq(2, 1)), vec![sq(3, 2)]);
    }

    #[test]
    fn blocked_landing_is_not_a_hop() {
        let board = board(&[sq(2, 1)], &[sq(3, 2), sq(4, 3)], &[]);
        assert!(!can_jump::<ManType>(&board, sq(2, 1), Side::Black));
        assert!(jump_trails::<ManType>(&board, sq(2, 1), Side::Black).is_empty());
    }

    #[test]
    fn own_pieces_cannot_be_jumped() {
        let board = board(&[sq(2, 1), sq(3, 2)], &[], &[]);
        assert!(!can_jump::<ManType>(&board, sq(2, 1), Side::Black));
    }

    #[test]
    fn men_do_not_jump_backwards() {
        let board = board(&[sq(4, 3)], &[sq(3, 2)], &[]);
        assert!(!can_jump::<ManType>(&board, sq(4, 3), Side::Black));
        assert!(can_jump::<KingType>(&board, sq(4, 3), Side::Black));
    }

    #[test]
    fn double_jump_is_one_trail() {
        let board = board(&[sq(2, 1)], &[sq(3, 2), sq(5, 2)], &[]);
        let trails = jump_trails::<ManType>(&board, sq(2, 1), Side::Black);
        assert_eq!(trails.len(), 1);
        assert_eq!(trails[0].landings(), &[sq(4, 3), sq(6, 1)]);
        assert_eq!(trails[0].captures(sq(2, 1)), vec![sq(3, 2), sq(5, 2)]);
    }

    #[test]
    fn branching_chains_are_all_maximal() {
        // From (4, 3) the man can continue to (6, 1) or (6, 5).
        let board = board(&[sq(2, 1)], &[sq(3, 2), sq(5, 2), sq(5, 4)], &[]);
        let trails = jump_trails::<ManType>(&board, sq(2, 1), Side::Black);
        assert_eq!(endpoints(&trails), vec![sq(6, 1), sq(6, 5)]);
        assert!(trails.iter().all(|t| t.len() == 2));
    }

    #[test]
    fn red_men_jump_toward_row_zero() {
        let board = board(&[sq(4, 3), sq(2, 3)], &[sq(5, 2)], &[]);
        let trails = jump_trails::<ManType>(&board, sq(5, 2), Side::Red);
        assert_eq!(endpoints(&trails), vec![sq(1, 2)]);
    }

    #[test]
    fn a_man_crowned_mid_chain_keeps_hopping_as_a_man() {
        // Black lands on row 7 after one hop.  A king there could go on over (6, 5).
        let board = board(&[sq(5, 2)], &[sq(6, 3), sq(6, 5)], &[]);
        let trails = jump_trails::<ManType>(&board, sq(5, 2), Side::Black);
        assert_eq!(trails.len(), 1);
        assert_eq!(trails[0].landings(), &[sq(7, 4)]);
    }

    #[test]
    fn king_chains_may_close_a_loop() {
        let board = board(
            &[sq(2, 3)],
            &[sq(3, 2), sq(3, 4), sq(5, 2), sq(5, 4)],
            &[sq(2, 3)],
        );
        let trails = jump_trails::<KingType>(&board, sq(2, 3), Side::Black);
        // Clockwise and counter-clockwise around the diamond, taking all four pieces.
        assert_eq!(trails.len(), 2);
        assert!(trails.iter().all(|t| t.len() == 4));
        assert!(trails.iter().all(|t| t.dest() == sq(2, 3)));
        // Passing (6, 3) is not the end of a chain, so it is not a destination.
        assert_eq!(
            find_trail::<KingType>(&board, sq(2, 3), Side::Black, sq(6, 3)),
            None
        );
    }

    #[test]
    fn kings_never_capture_the_same_piece_twice() {
        // A king that hops over (3, 2) and back would return to (2, 1) over the same piece.
        let board = board(&[sq(2, 1)], &[sq(3, 2)], &[sq(2, 1)]);
        let trails = jump_trails::<KingType>(&board, sq(2, 1), Side::Black);
        assert_eq!(trails.len(), 1);
        assert_eq!(trails[0].landings(), &[sq(4, 3)]);
    }

    #[test]
    fn longest_trail_wins_the_destination() {
        let short = Trail {
            landings: vec![sq(4, 3)],
        };
        let long = Trail {
            landings: vec![sq(4, 5), sq(2, 7), sq(0, 5), sq(2, 3), sq(4, 3)],
        };
        let chosen = select_trail(vec![short, long.clone()], sq(4, 3));
        assert_eq!(chosen, Some(long));
    }

    #[test]
    fn equal_trails_tie_break_lexicographically() {
        let a = Trail {
            landings: vec![sq(2, 5), sq(4, 3)],
        };
        let b = Trail {
            landings: vec![sq(2, 1), sq(4, 3)],
        };
        assert_eq!(select_trail(vec![a, b.clone()], sq(4, 3)), Some(b));
    }

    #[test]
    fn missing_destination_has_no_trail() {
        let board = board(&[sq(2, 1)], &[sq(3, 2)], &[]);
        assert_eq!(
            find_trail::<ManType>(&board, sq(2, 1), Side::Black, sq(3, 0)),
            None
        );
    }

    #[test]
    fn two_routes_to_the_same_square() {
        // A man on (0, 3) can reach (4, 3) through (2, 1) or through (2, 5).
        let board = board(
            &[sq(0, 3)],
            &[sq(1, 2), sq(1, 4), sq(3, 2), sq(3, 4)],
            &[],
        );
        let trails = jump_trails::<ManType>(&board, sq(0, 3), Side::Black);
        assert_eq!(endpoints(&trails), vec![sq(4, 3), sq(4, 3)]);

        let trail = find_trail::<ManType>(&board, sq(0, 3), Side::Black, sq(4, 3))
            .expect("the man can reach (4, 3)");
        assert_eq!(trail.landings(), &[sq(2, 1), sq(4, 3)]);
        assert_eq!(trail.captures(sq(0, 3)), vec![sq(1, 2), sq(3, 2)]);
    }
}
