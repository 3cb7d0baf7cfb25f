use crate::direction::{Direction, ALL_DIRECTIONS, NUM_DIRECTIONS};
use crate::piece::Piece;
use crate::side::Side;

use arrayvec::ArrayVec;

/// Movement rules that differ between men and kings, resolved at compile time.
pub trait PieceType {
    fn is(piece: &Piece) -> bool;
    /// Diagonals this kind of piece may step and jump along.
    fn directions(side: Side) -> ArrayVec<Direction, NUM_DIRECTIONS>;
}

pub struct ManType;
pub struct KingType;

impl PieceType for ManType {
    #[inline(always)]
    fn is(piece: &Piece) -> bool {
        !piece.is_king()
    }

    #[inline(always)]
    fn directions(side: Side) -> ArrayVec<Direction, NUM_DIRECTIONS> {
        Direction::forward(side).iter().cloned().collect()
    }
}

impl PieceType for KingType {
    #[inline(always)]
    fn is(piece: &Piece) -> bool {
        piece.is_king()
    }

    #[inline(always)]
    fn directions(_side: Side) -> ArrayVec<Direction, NUM_DIRECTIONS> {
        ArrayVec::from(ALL_DIRECTIONS)
    }
}

/// Call a function generic over `PieceType` with the type matching `$piece`.
macro_rules! for_piece_type {
    ($piece:expr, $func:ident ( $($arg:expr),* )) => {
        if <$crate::movegen::piece_type::KingType as $crate::movegen::piece_type::PieceType>::is($piece) {
            $func::<$crate::movegen::piece_type::KingType>($($arg),*)
        } else {
            $func::<$crate::movegen::piece_type::ManType>($($arg),*)
        }
    };
}
