use crate::board::Board;
use crate::config::GameConfig;
use crate::error::Error;
use crate::piece::Piece;
use crate::side::{Side, ALL_SIDES};
use crate::square::Square;

use std::collections::BTreeMap;
use std::convert::TryFrom;

/// Represents a checkers position that has *not* been validated.
///
/// This structure is useful when you want to set up a position by hand, for example to test a
/// particular capture chain, instead of playing it out from the starting layout.  Squares are
/// checked against the board size when the builder is converted into a `Board`.
///
/// ```
/// use checkers::{Board, BoardBuilder, Side, Square};
/// use std::convert::TryFrom;
///
/// let mut position = BoardBuilder::new();
/// position
///     .piece(Square::new(2, 1), Side::Black)
///     .piece(Square::new(3, 2), Side::Red)
///     .king(Square::new(7, 0), Side::Red);
///
/// assert_eq!(position.get(Square::new(7, 0)), Some((Side::Red, true)));
///
/// let board = Board::try_from(&position).expect("every square is on the board");
/// assert_eq!(board.count(Side::Red), 2);
///
/// // (8, 1) is off an 8x8 board.
/// position.piece(Square::new(8, 1), Side::Black);
/// assert!(Board::try_from(&position).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardBuilder {
    config: GameConfig,
    pieces: BTreeMap<Square, (Side, bool)>,
    side_to_move: Side,
}

impl BoardBuilder {
    /// Construct a new, empty builder for the default board size.
    pub fn new() -> BoardBuilder {
        BoardBuilder::with_config(GameConfig::default())
    }

    /// Construct a new, empty builder for a particular configuration.  The side to move starts
    /// as `config.first_to_move`.
    pub fn with_config(config: GameConfig) -> BoardBuilder {
        BoardBuilder {
            config,
            pieces: BTreeMap::new(),
            side_to_move: config.first_to_move,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn get_side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// What stands on `square`?
    pub fn get(&self, square: Square) -> Option<(Side, bool)> {
        self.pieces.get(&square).cloned()
    }

    /// Set the side to move.
    pub fn side_to_move<'a>(&'a mut self, side: Side) -> &'a mut Self {
        self.side_to_move = side;
        self
    }

    /// Put a man on a square, replacing whatever was there.
    pub fn piece<'a>(&'a mut self, square: Square, side: Side) -> &'a mut Self {
        self.pieces.insert(square, (side, false));
        self
    }

    /// Put a king on a square, replacing whatever was there.
    pub fn king<'a>(&'a mut self, square: Square, side: Side) -> &'a mut Self {
        self.pieces.insert(square, (side, true));
        self
    }

    /// Empty a square.
    pub fn clear_square<'a>(&'a mut self, square: Square) -> &'a mut Self {
        self.pieces.remove(&square);
        self
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        BoardBuilder::new()
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut builder = BoardBuilder::with_config(
            GameConfig::default().with_piece_rows((board.width() - 2) / 2),
        );
        for side in ALL_SIDES.iter() {
            for piece in board.pieces(*side) {
                builder
                    .pieces
                    .insert(piece.square(), (piece.side(), piece.is_king()));
            }
        }
        builder
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &BoardBuilder) -> Result<Self, Self::Error> {
        builder.config.validate()?;
        let mut board = Board::new(builder.config.width());

        if builder.pieces.keys().any(|square| !board.in_bounds(*square)) {
            return Err(Error::InvalidBoard);
        }

        for (square, (side, king)) in builder.pieces.iter() {
            let piece = if *king {
                Piece::new_king(*side, *square)
            } else {
                Piece::new(*side, *square)
            };
            board.place(piece);
        }

        Ok(board)
    }
}

impl TryFrom<&mut BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &mut BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&*builder)
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_a_board() {
        let board = Board::starting(3);
        let builder = BoardBuilder::from(&board);
        assert_eq!(Board::try_from(&builder), Ok(board));
    }

    #[test]
    fn later_pieces_replace_earlier_ones() {
        let mut builder = BoardBuilder::new();
        builder
            .piece(Square::new(3, 2), Side::Red)
            .king(Square::new(3, 2), Side::Black);
        assert_eq!(builder.get(Square::new(3, 2)), Some((Side::Black, true)));
        builder.clear_square(Square::new(3, 2));
        assert_eq!(builder.get(Square::new(3, 2)), None);
    }

    #[test]
    #[should_panic]
    fn light_squares_panic_on_conversion() {
        let mut builder = BoardBuilder::new();
        builder.piece(Square::new(3, 3), Side::Red);
        let _ = Board::try_from(&builder);
    }

    #[test]
    fn invalid_size_is_an_error() {
        let builder = BoardBuilder::with_config(GameConfig::default().with_piece_rows(0));
        assert_eq!(
            Board::try_from(&builder),
            Err(Error::InvalidBoardSize { piece_rows: 0 })
        );
    }
}
