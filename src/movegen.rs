#[macro_use]
pub(crate) mod piece_type;
pub mod trail;

use crate::board::Board;
use crate::checkers_move::CheckersMove;
use crate::movegen::piece_type::PieceType;
use crate::movegen::trail::{can_jump, find_trail, jump_trails, Trail};
use crate::side::Side;
use crate::square::Square;

use std::collections::BTreeMap;
use std::iter::ExactSizeIterator;

/// Every legal destination of one piece.
///
/// If the piece can capture, only the ends of its maximal capture chains are returned.
/// Otherwise these are the empty neighboring squares it may step to.
fn destinations<T: PieceType>(board: &Board, square: Square, side: Side) -> Vec<Square> {
    if can_jump::<T>(board, square, side) {
        let mut result: Vec<Square> = vec![];
        for trail in jump_trails::<T>(board, square, side) {
            if !result.contains(&trail.dest()) {
                result.push(trail.dest());
            }
        }
        result
    } else {
        T::directions(side)
            .iter()
            .filter_map(|dir| board.step(square, *dir, 1))
            .filter(|dest| board.is_empty(*dest))
            .collect()
    }
}

/// Does the piece on `square` have a capture available?  An empty square never does.
pub fn has_capture(board: &Board, square: Square) -> bool {
    match board.get(square) {
        Some(piece) => for_piece_type!(piece, can_jump(board, square, piece.side())),
        None => false,
    }
}

/// List every square the piece on `square` may legally move to.
///
/// Capturing is forced per piece: when this piece can capture, plain steps are not offered.
/// An empty or off-board square has no moves.
///
/// ```
/// use checkers::{list_moves, Board, Square};
///
/// let board = Board::starting(3);
/// assert_eq!(list_moves(&board, Square::new(2, 1)), vec![Square::new(3, 0), Square::new(3, 2)]);
/// assert!(list_moves(&board, Square::new(0, 1)).is_empty());
/// ```
pub fn list_moves(board: &Board, square: Square) -> Vec<Square> {
    match board.get(square) {
        Some(piece) => for_piece_type!(piece, destinations(board, square, piece.side())),
        None => vec![],
    }
}

/// Map each piece of `side` that can move to its legal destinations.  Pieces without any
/// destination are left out entirely.
///
/// ```
/// use checkers::{all_team_moves, Board, Side};
///
/// let board = Board::starting(3);
/// let moves = all_team_moves(&board, Side::Black);
/// // Only the front row can move at the start.
/// assert_eq!(moves.len(), 4);
/// assert_eq!(moves.values().map(|dests| dests.len()).sum::<usize>(), 7);
/// ```
pub fn all_team_moves(board: &Board, side: Side) -> BTreeMap<Square, Vec<Square>> {
    let mut result = BTreeMap::new();
    for piece in board.pieces(side) {
        let dests = list_moves(board, piece.square());
        if !dests.is_empty() {
            result.insert(piece.square(), dests);
        }
    }
    result
}

/// Does `side` have any legal move at all?  Stops at the first piece that can move.
pub fn has_any_move(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|piece| !list_moves(board, piece.square()).is_empty())
}

/// The capture chain the piece on `source` plays to reach `dest`, if it is a capture at all.
pub fn capture_trail(board: &Board, source: Square, dest: Square) -> Option<Trail> {
    let piece = board.get(source)?;
    for_piece_type!(piece, find_trail(board, source, piece.side(), dest))
}

/// An incremental move generator over every legal move of one side.
///
/// ```
/// use checkers::{Board, MoveGen, Side};
///
/// let board = Board::starting(3);
/// let movegen = MoveGen::new_legal(&board, Side::Red);
/// assert_eq!(movegen.len(), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MoveGen {
    moves: Vec<CheckersMove>,
    index: usize,
}

impl MoveGen {
    /// Create a new `MoveGen` for `side` on `board`.
    pub fn new_legal(board: &Board, side: Side) -> MoveGen {
        let mut moves = vec![];
        for (source, dests) in all_team_moves(board, side) {
            for dest in dests {
                moves.push(CheckersMove::new(source, dest));
            }
        }
        MoveGen { moves, index: 0 }
    }
}

impl ExactSizeIterator for MoveGen {
    fn len(&self) -> usize {
        self.moves.len() - self.index
    }
}

impl Iterator for MoveGen {
    type Item = CheckersMove;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn next(&mut self) -> Option<CheckersMove> {
        let mv = self.moves.get(self.index).cloned();
        if mv.is_some() {
            self.index += 1;
        }
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_builder::BoardBuilder;
    use std::convert::TryFrom;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn capture_suppresses_steps_for_that_piece_only() {
        let mut builder = BoardBuilder::new();
        builder
            .piece(sq(2, 1), Side::Black)
            .piece(sq(2, 5), Side::Black)
            .piece(sq(3, 2), Side::Red);
        let board = Board::try_from(&builder).expect("valid position");

        assert!(has_capture(&board, sq(2, 1)));
        assert_eq!(list_moves(&board, sq(2, 1)), vec![sq(4, 3)]);
        // The other black man is free to step: capturing is forced per piece.
        assert!(!has_capture(&board, sq(2, 5)));
        assert_eq!(list_moves(&board, sq(2, 5)), vec![sq(3, 4), sq(3, 6)]);
    }

    #[test]
    fn kings_step_in_four_directions() {
        let mut builder = BoardBuilder::new();
        builder.king(sq(4, 3), Side::Red);
        let board = Board::try_from(&builder).expect("valid position");
        assert_eq!(
            list_moves(&board, sq(4, 3)),
            vec![sq(3, 2), sq(3, 4), sq(5, 2), sq(5, 4)]
        );
    }

    #[test]
    fn edge_pieces_have_fewer_steps() {
        let mut builder = BoardBuilder::new();
        builder.piece(sq(3, 0), Side::Black).king(sq(7, 0), Side::Red);
        let board = Board::try_from(&builder).expect("valid position");
        assert_eq!(list_moves(&board, sq(3, 0)), vec![sq(4, 1)]);
        assert_eq!(list_moves(&board, sq(7, 0)), vec![sq(6, 1)]);
    }

    #[test]
    fn stuck_pieces_are_not_keys() {
        let mut builder = BoardBuilder::new();
        builder
            .piece(sq(6, 1), Side::Red)
            .piece(sq(5, 0), Side::Black)
            .piece(sq(5, 2), Side::Black)
            .piece(sq(4, 3), Side::Black)
            .piece(sq(7, 0), Side::Black);
        let board = Board::try_from(&builder).expect("valid position");

        // Red is hemmed in: both forward squares are taken and nothing can be jumped.
        assert!(list_moves(&board, sq(6, 1)).is_empty());
        let moves = all_team_moves(&board, Side::Red);
        assert!(moves.is_empty());
        assert!(!moves.contains_key(&sq(6, 1)));
        assert!(!has_any_move(&board, Side::Red));
    }

    #[test]
    fn empty_and_off_board_squares_have_no_moves() {
        let board = Board::starting(3);
        assert!(list_moves(&board, sq(3, 0)).is_empty());
        assert!(list_moves(&board, sq(9, 9)).is_empty());
        assert!(!has_capture(&board, sq(9, 9)));
        assert_eq!(capture_trail(&board, sq(9, 9), sq(7, 7)), None);
    }

    #[test]
    fn opening_moves() {
        let board = Board::starting(3);
        let black = all_team_moves(&board, Side::Black);
        assert_eq!(
            black.keys().cloned().collect::<Vec<_>>(),
            vec![sq(2, 1), sq(2, 3), sq(2, 5), sq(2, 7)]
        );
        assert_eq!(black[&sq(2, 7)], vec![sq(3, 6)]);
        assert_eq!(MoveGen::new_legal(&board, Side::Black).count(), 7);
    }

    #[test]
    fn duplicate_endpoints_are_listed_once() {
        let mut builder = BoardBuilder::new();
        builder
            .piece(sq(0, 3), Side::Black)
            .piece(sq(1, 2), Side::Red)
            .piece(sq(1, 4), Side::Red)
            .piece(sq(3, 2), Side::Red)
            .piece(sq(3, 4), Side::Red);
        let board = Board::try_from(&builder).expect("valid position");
        assert_eq!(list_moves(&board, sq(0, 3)), vec![sq(4, 3)]);
    }
}
