use crate::game::GameStatus;
use crate::side::Side;
use crate::square::Square;
use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// The square is not on the board
    #[fail(display = "Square {} is off the {}x{} board", square, width, width)]
    InvalidPosition { square: Square, width: usize },

    /// There is no piece to move
    #[fail(display = "There is no piece on {}", square)]
    EmptySquare { square: Square },

    /// The piece belongs to the other side
    #[fail(display = "The piece on {} does not belong to {}", square, side)]
    WrongSide { square: Square, side: Side },

    /// The destination is not one of the piece's legal destinations
    #[fail(display = "Illegal move from {} to {}", source, dest)]
    IllegalMove { source: Square, dest: Square },

    /// A side tried to move out of turn
    #[fail(display = "{} cannot move, it is {}'s turn", side, turn)]
    NotYourTurn { side: Side, turn: Side },

    /// The game already ended
    #[fail(display = "The game is over: {}", status)]
    GameOver { status: GameStatus },

    /// The board would be empty or too large to address
    #[fail(
        display = "Cannot build a board with {} rows of pieces per side; use between 1 and 126",
        piece_rows
    )]
    InvalidBoardSize { piece_rows: usize },

    /// A game that is drawn before the first move is no game at all
    #[fail(display = "The no-capture limit must allow at least one move")]
    InvalidNoCaptureLimit,

    /// The position created from BoardBuilder was found to be invalid
    #[fail(display = "The position specified places a piece off the board")]
    InvalidBoard,
}
