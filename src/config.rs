use crate::error::Error;
use crate::side::Side;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Largest number of piece rows whose board width still fits a `Square` coordinate.
pub const MAX_PIECE_ROWS: usize = 126;

/// How a match is set up.
///
/// ```
/// use checkers::{GameConfig, Side};
///
/// let config = GameConfig::default().with_piece_rows(4);
/// assert_eq!(config.width(), 10);
/// assert_eq!(config.no_capture_limit, 40);
/// assert_eq!(config.first_to_move, Side::Black);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Rows of pieces each side starts with.  The board is `2 * piece_rows + 2` squares wide.
    pub piece_rows: usize,
    /// Half-moves without a capture, counted over both sides, before the game is drawn.
    pub no_capture_limit: u32,
    /// Who plays the first move.
    pub first_to_move: Side,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            piece_rows: 3,
            no_capture_limit: 40,
            first_to_move: Side::Black,
        }
    }
}

impl GameConfig {
    pub fn with_piece_rows(mut self, piece_rows: usize) -> GameConfig {
        self.piece_rows = piece_rows;
        self
    }

    pub fn with_no_capture_limit(mut self, no_capture_limit: u32) -> GameConfig {
        self.no_capture_limit = no_capture_limit;
        self
    }

    pub fn with_first_to_move(mut self, side: Side) -> GameConfig {
        self.first_to_move = side;
        self
    }

    /// Width (and height) of the board.
    #[inline]
    pub fn width(&self) -> usize {
        2 * self.piece_rows + 2
    }

    /// Make sure the board can be built and the game can last at least one move.
    ///
    /// ```
    /// use checkers::GameConfig;
    ///
    /// assert!(GameConfig::default().validate().is_ok());
    /// assert!(GameConfig::default().with_piece_rows(0).validate().is_err());
    /// assert!(GameConfig::default().with_no_capture_limit(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        if self.piece_rows == 0 || self.piece_rows > MAX_PIECE_ROWS {
            Err(Error::InvalidBoardSize {
                piece_rows: self.piece_rows,
            })
        } else if self.no_capture_limit == 0 {
            Err(Error::InvalidNoCaptureLimit)
        } else {
            Ok(())
        }
    }
}
