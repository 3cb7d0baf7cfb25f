use crate::config::MAX_PIECE_ROWS;
use crate::direction::Direction;
use crate::piece::{Piece, PieceId};
use crate::side::{Side, ALL_SIDES, NUM_SIDES};
use crate::square::Square;
use std::collections::BTreeSet;
use std::fmt;

/// The board store: a `width x width` grid of cells, the pieces in play, and each side's set of
/// live pieces.
///
/// The grid and the side sets are only ever changed together, so for every occupied cell the
/// piece stored there records that same square and sits in its side's set, and vice versa.
/// `place` and `clear` are purely mechanical and know nothing about the rules of the game.
///
/// ```
/// use checkers::{Board, Piece, Side, Square};
///
/// let mut board = Board::new(8);
/// board.place(Piece::new(Side::Black, Square::new(2, 1)));
/// assert_eq!(board.get(Square::new(2, 1)).map(|p| p.side()), Some(Side::Black));
/// assert_eq!(board.count(Side::Black), 1);
///
/// board.clear(Square::new(2, 1));
/// assert!(board.get(Square::new(2, 1)).is_none());
/// assert_eq!(board.count(Side::Black), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    cells: Vec<Option<PieceId>>,
    pieces: Vec<Option<Piece>>,
    sides: [BTreeSet<PieceId>; NUM_SIDES],
}

/// Widest board whose squares still fit a `Square` coordinate.
pub const MAX_WIDTH: usize = 2 * MAX_PIECE_ROWS + 2;

impl Board {
    /// Construct an empty board.
    ///
    /// Panics if `width` is over `MAX_WIDTH`.  Use `GameConfig::validate` or `Game::new` to
    /// turn a bad size into an `Error` instead.
    pub fn new(width: usize) -> Board {
        assert!(
            width <= MAX_WIDTH,
            "a board {} squares wide is too large, the limit is {}",
            width,
            MAX_WIDTH
        );
        Board {
            width,
            cells: vec![None; width * width],
            pieces: vec![],
            sides: [BTreeSet::new(), BTreeSet::new()],
        }
    }

    /// Construct a board in the starting layout: `piece_rows` rows of Black on top and
    /// `piece_rows` rows of Red at the bottom, on alternating dark squares.
    ///
    /// Panics if `piece_rows` is over `MAX_PIECE_ROWS`.
    pub fn starting(piece_rows: usize) -> Board {
        let mut board = Board::new(2 * piece_rows + 2);
        board.set_up(piece_rows);
        board
    }

    /// Put every piece back in the starting layout, reusing the grid.
    pub(crate) fn set_up(&mut self, piece_rows: usize) {
        debug_assert_eq!(self.width, 2 * piece_rows + 2);
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
        self.pieces.clear();
        for set in self.sides.iter_mut() {
            set.clear();
        }

        let width = self.width;
        let rows = (0..piece_rows)
            .map(|row| (row, Side::Black))
            .chain((width - piece_rows..width).map(|row| (row, Side::Red)));
        for (row, side) in rows {
            for col in 0..width {
                let square = Square::new(row as u8, col as u8);
                if square.is_playable() {
                    self.place(Piece::new(side, square));
                }
            }
        }
    }

    /// Width (and height) of the board.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Is this square on the board?  Nothing touches the grid without asking first.
    #[inline]
    pub fn in_bounds(&self, square: Square) -> bool {
        square.row() < self.width && square.col() < self.width
    }

    /// The square `distance` steps from `square` along `dir`, if it is on the board.
    #[inline]
    pub fn step(&self, square: Square, dir: Direction, distance: i32) -> Option<Square> {
        dir.walk(square, distance).filter(|sq| self.in_bounds(*sq))
    }

    #[inline]
    fn index(&self, square: Square) -> usize {
        debug_assert!(self.in_bounds(square), "{} is off the board", square);
        square.row() * self.width + square.col()
    }

    /// The id of the piece on `square`, if any.
    #[inline]
    pub fn id_at(&self, square: Square) -> Option<PieceId> {
        if self.in_bounds(square) {
            self.cells[self.index(square)]
        } else {
            None
        }
    }

    /// The piece on `square`, if any.  Off-board squares are simply empty.
    #[inline]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.id_at(square).map(|id| self.piece(id))
    }

    /// Is there nothing on this (on-board) square?
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.in_bounds(square) && self.cells[self.index(square)].is_none()
    }

    /// Look up a live piece by id.
    ///
    /// Panics if the piece has been captured; holding a dead id is a bug.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.pieces[id.0]
            .as_ref()
            .expect("piece ids are only handed out for live pieces")
    }

    /// Add a piece to the grid and to its side's set.
    ///
    /// Panics if the square is off the board or already occupied.
    pub fn place(&mut self, piece: Piece) -> PieceId {
        let square = piece.square();
        assert!(self.in_bounds(square), "{} is off the board", square);
        let index = self.index(square);
        assert!(self.cells[index].is_none(), "{} is already occupied", square);

        let id = PieceId(self.pieces.len());
        self.pieces.push(Some(piece));
        self.cells[index] = Some(id);
        self.sides[piece.side().to_index()].insert(id);
        id
    }

    /// Remove whatever stands on `square` from both the grid and its side's set.
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        let id = self.id_at(square)?;
        let index = self.index(square);
        let piece = self.pieces[id.0].take()?;
        self.cells[index] = None;
        let removed = self.sides[piece.side().to_index()].remove(&id);
        debug_assert!(removed, "the piece on {} was missing from its set", square);
        Some(piece)
    }

    /// Move a live piece to an empty square.  Identity and set membership are unchanged.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) {
        let from = self.piece(id).square();
        if from == to {
            return;
        }
        assert!(self.in_bounds(to), "{} is off the board", to);
        let (from_index, to_index) = (self.index(from), self.index(to));
        assert!(self.cells[to_index].is_none(), "{} is already occupied", to);

        self.cells[from_index] = None;
        self.cells[to_index] = Some(id);
        if let Some(piece) = self.pieces[id.0].as_mut() {
            piece.set_square(to);
        }
    }

    /// Crown a live piece in place.  Returns `true` if it was not already a king.
    pub(crate) fn crown(&mut self, id: PieceId) -> bool {
        match self.pieces[id.0].as_mut() {
            Some(piece) => piece.crown(),
            None => false,
        }
    }

    /// Every live piece of `side`, in the order they were placed.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.sides[side.to_index()]
            .iter()
            .map(move |id| self.piece(*id))
    }

    /// The ids of every live piece of `side`.
    pub fn ids(&self, side: Side) -> impl Iterator<Item = PieceId> + '_ {
        self.sides[side.to_index()].iter().cloned()
    }

    /// How many pieces does `side` have left?
    #[inline]
    pub fn count(&self, side: Side) -> usize {
        self.sides[side.to_index()].len()
    }

    /// Panic unless the grid and the side sets describe exactly the same pieces.
    pub fn assert_consistent(&self) {
        let mut seen = 0;
        for side in ALL_SIDES.iter() {
            for id in self.sides[side.to_index()].iter() {
                let piece = self.pieces[id.0]
                    .as_ref()
                    .expect("side sets only hold live pieces");
                assert_eq!(piece.side(), *side, "piece filed under the wrong side");
                assert!(piece.square().is_playable());
                assert_eq!(
                    self.cells[self.index(piece.square())],
                    Some(*id),
                    "the grid disagrees with the piece on {}",
                    piece.square()
                );
                seen += 1;
            }
        }
        let occupied = self.cells.iter().filter(|cell| cell.is_some()).count();
        assert_eq!(occupied, seen, "the grid holds pieces missing from the side sets");
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.width {
            for col in 0..self.width {
                match self.get(Square::new(row as u8, col as u8)) {
                    Some(piece) => write!(f, "{}", piece.view())?,
                    None => write!(f, "| |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_layout_fills_dark_squares() {
        let board = Board::starting(3);
        assert_eq!(board.width(), 8);
        assert_eq!(board.count(Side::Black), 12);
        assert_eq!(board.count(Side::Red), 12);
        assert_eq!(board.get(Square::new(0, 1)).map(|p| p.side()), Some(Side::Black));
        assert_eq!(board.get(Square::new(2, 7)).map(|p| p.side()), Some(Side::Black));
        assert_eq!(board.get(Square::new(5, 0)).map(|p| p.side()), Some(Side::Red));
        assert!(board.get(Square::new(3, 0)).is_none());
        assert!(board.get(Square::new(0, 0)).is_none());
        board.assert_consistent();
    }

    #[test]
    fn starting_layout_scales_with_piece_rows() {
        let board = Board::starting(4);
        assert_eq!(board.width(), 10);
        assert_eq!(board.count(Side::Black), 20);
        assert_eq!(board.count(Side::Red), 20);
        board.assert_consistent();
    }

    #[test]
    fn off_board_squares_are_empty_not_panics() {
        let board = Board::starting(3);
        assert!(!board.in_bounds(Square::new(8, 1)));
        assert!(board.get(Square::new(8, 1)).is_none());
        assert!(!board.is_empty(Square::new(1, 8)));
        assert_eq!(board.step(Square::new(7, 0), Direction::DownRight, 1), None);
    }

    #[test]
    fn relocate_keeps_identity() {
        let mut board = Board::new(8);
        let id = board.place(Piece::new(Side::Red, Square::new(5, 0)));
        board.relocate(id, Square::new(4, 1));
        assert_eq!(board.id_at(Square::new(4, 1)), Some(id));
        assert!(board.get(Square::new(5, 0)).is_none());
        assert_eq!(board.piece(id).square(), Square::new(4, 1));
        board.assert_consistent();
    }

    #[test]
    #[should_panic]
    fn placing_on_an_occupied_square_panics() {
        let mut board = Board::new(8);
        board.place(Piece::new(Side::Red, Square::new(5, 0)));
        board.place(Piece::new(Side::Black, Square::new(5, 0)));
    }

    #[test]
    fn largest_board_fits() {
        let board = Board::starting(MAX_PIECE_ROWS);
        assert_eq!(board.width(), MAX_WIDTH);
        let corner = Square::new((MAX_WIDTH - 1) as u8, (MAX_WIDTH - 2) as u8);
        assert_eq!(board.get(corner).map(|p| p.side()), Some(Side::Red));
        board.assert_consistent();
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn oversized_boards_are_refused() {
        Board::starting(MAX_PIECE_ROWS + 4);
    }

    #[test]
    fn set_up_resets_in_place() {
        let mut board = Board::starting(3);
        board.clear(Square::new(5, 0));
        board.clear(Square::new(0, 1));
        board.set_up(3);
        assert_eq!(board, Board::starting(3));
    }

    #[test]
    fn display_draws_cells() {
        let mut board = Board::new(4);
        board.place(Piece::new(Side::Black, Square::new(0, 1)));
        board.place(Piece::new_king(Side::Red, Square::new(3, 0)));
        assert_eq!(
            format!("{}", board),
            "| ||b|| || |\n| || || || |\n| || || || |\n|R|| || || |\n"
        );
    }
}
