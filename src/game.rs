use crate::board::Board;
use crate::board_builder::BoardBuilder;
use crate::checkers_move::CheckersMove;
use crate::config::GameConfig;
use crate::error::Error;
use crate::execute::{execute, MoveOutcome};
use crate::movegen::{self, MoveGen};
use crate::piece::PieceView;
use crate::side::{Side, NUM_SIDES};
use crate::square::Square;

use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Where does the game stand?
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Side),
    Drawn,
}

impl GameStatus {
    /// Has the game ended, one way or another?
    #[inline]
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(side) => write!(f, "{} won", side),
            GameStatus::Drawn => write!(f, "drawn"),
        }
    }
}

/// A game of checkers: the board, whose turn it is, the no-capture counters, pending draw
/// offers and the result.
///
/// Every mutating call either succeeds completely or returns an `Error` and leaves the game
/// exactly as it was, so a caller can retry with a corrected move.
///
/// One `Game` serves one match.  It has no interior locking, so sharing it between threads
/// needs external synchronization such as a `Mutex`.
///
/// ```
/// use checkers::{Game, GameStatus, Side, Square};
///
/// let mut game = Game::default();
/// assert_eq!(game.turn(), Side::Black);
///
/// game.move_piece(Square::new(2, 1), Square::new(3, 2), Side::Black).expect("legal opening");
/// assert_eq!(game.turn(), Side::Red);
/// assert_eq!(game.status(), GameStatus::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    turn: Side,
    status: GameStatus,
    quiet_moves: [u32; NUM_SIDES],
    wants_draw: [bool; NUM_SIDES],
}

impl Default for Game {
    fn default() -> Game {
        Game::from_parts(GameConfig::default(), Board::starting(3))
    }
}

impl Game {
    /// A fresh game with `piece_rows` rows of men per side, on a board of width
    /// `2 * piece_rows + 2`.
    ///
    /// ```
    /// use checkers::{Game, Side};
    ///
    /// let game = Game::new(4).expect("valid size");
    /// assert_eq!(game.board().width(), 10);
    /// assert_eq!(game.piece_count(Side::Red), 20);
    /// assert!(Game::new(0).is_err());
    /// ```
    pub fn new(piece_rows: usize) -> Result<Game, Error> {
        Game::with_config(GameConfig::default().with_piece_rows(piece_rows))
    }

    /// A fresh game using every setting in `config`.
    pub fn with_config(config: GameConfig) -> Result<Game, Error> {
        config.validate()?;
        Ok(Game::from_parts(config, Board::starting(config.piece_rows)))
    }

    /// Start from a custom position.  The game may already be over if one side has nothing
    /// left to play with.
    ///
    /// ```
    /// use checkers::{BoardBuilder, Game, Side, Square};
    ///
    /// let mut builder = BoardBuilder::new();
    /// builder.piece(Square::new(5, 2), Side::Black);
    /// let game = Game::from_builder(&builder).expect("valid position");
    /// assert!(game.is_winner(Side::Black));
    /// ```
    pub fn from_builder(builder: &BoardBuilder) -> Result<Game, Error> {
        let board = Board::try_from(builder)?;
        let config = builder
            .config()
            .with_first_to_move(builder.get_side_to_move());
        Ok(Game::from_parts(config, board))
    }

    fn from_parts(config: GameConfig, board: Board) -> Game {
        let mut game = Game {
            config,
            board,
            turn: config.first_to_move,
            status: GameStatus::InProgress,
            quiet_moves: [0; NUM_SIDES],
            wants_draw: [false; NUM_SIDES],
        };
        game.refresh_status();
        game
    }

    /// Put every piece back on its starting square and forget the history of the match.
    ///
    /// The board keeps its grid; only the pieces are replaced.
    pub fn reset_game(&mut self) {
        self.board.set_up(self.config.piece_rows);
        self.turn = self.config.first_to_move;
        self.status = GameStatus::InProgress;
        self.quiet_moves = [0; NUM_SIDES];
        self.wants_draw = [false; NUM_SIDES];
        self.refresh_status();
        debug!(piece_rows = self.config.piece_rows, "game reset");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Whose turn is it?
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.status.is_over()
    }

    /// The winning side, if the game was won.  A drawn or unfinished game has none.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_winner(&self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.board.count(side)
    }

    /// How many quiet moves `side` has played since the last capture by either side.
    pub fn moves_since_capture(&self, side: Side) -> u32 {
        self.quiet_moves[side.to_index()]
    }

    /// Does `side` currently want the game drawn?
    pub fn wants_draw(&self, side: Side) -> bool {
        self.wants_draw[side.to_index()]
    }

    /// A snapshot of the piece on `square`.  Empty and off-board squares give `None`.
    pub fn piece_at(&self, square: Square) -> Option<PieceView> {
        self.board.get(square).map(|piece| piece.view())
    }

    /// Every legal destination of the piece on `square`.
    pub fn list_moves(&self, square: Square) -> Vec<Square> {
        movegen::list_moves(&self.board, square)
    }

    /// Every piece of `side` that can move, with its destinations.
    pub fn all_team_moves(&self, side: Side) -> BTreeMap<Square, Vec<Square>> {
        movegen::all_team_moves(&self.board, side)
    }

    /// Iterate over the legal moves of the side to move.  Finished games have none.
    pub fn legal_moves(&self) -> MoveGen {
        if self.is_done() {
            MoveGen::default()
        } else {
            MoveGen::new_legal(&self.board, self.turn)
        }
    }

    /// Could the piece on `source` legally go to `dest`?  Turn order is not considered.
    pub fn is_valid_move(&self, source: Square, dest: Square) -> bool {
        self.list_moves(source).contains(&dest)
    }

    /// Does the piece on `square` have anywhere to go?
    pub fn can_move(&self, square: Square) -> bool {
        !self.list_moves(square).is_empty()
    }

    /// Would this legal move crown the piece?
    ///
    /// ```
    /// use checkers::{BoardBuilder, Game, Side, Square};
    ///
    /// let mut builder = BoardBuilder::new();
    /// builder.piece(Square::new(6, 1), Side::Black).piece(Square::new(1, 2), Side::Red);
    /// let game = Game::from_builder(&builder).expect("valid position");
    /// assert!(game.will_king(Square::new(6, 1), Square::new(7, 2)));
    /// assert!(!game.will_king(Square::new(1, 2), Square::new(2, 1)));
    /// ```
    pub fn will_king(&self, source: Square, dest: Square) -> bool {
        match self.board.get(source) {
            Some(piece) => {
                !piece.is_king()
                    && dest.row() == piece.side().to_promotion_row(self.board.width())
                    && self.is_valid_move(source, dest)
            }
            None => false,
        }
    }

    /// The squares of the pieces this move would capture, in order.  Steps capture nothing;
    /// illegal moves give `None`.
    pub fn capture_path(&self, source: Square, dest: Square) -> Option<Vec<Square>> {
        if !self.is_valid_move(source, dest) {
            return None;
        }
        if source.row_distance(dest) == 1 {
            return Some(vec![]);
        }
        movegen::capture_trail(&self.board, source, dest).map(|trail| trail.captures(source))
    }

    /// How many pieces this move would capture.  Steps and illegal moves capture none.
    pub fn num_jumps(&self, source: Square, dest: Square) -> usize {
        self.capture_path(source, dest)
            .map(|captured| captured.len())
            .unwrap_or(0)
    }

    /// Would playing this move leave `side` as the winner?  The move is tried on a copy, so
    /// this game is not changed.  Turn order is not considered: the piece's owner plays it.
    pub fn is_winning_move(&self, source: Square, dest: Square, side: Side) -> bool {
        let mover = match self.board.get(source) {
            Some(piece) => piece.side(),
            None => return false,
        };
        let mut trial = self.clone();
        trial.turn = mover;
        trial.apply(source, dest, mover).is_ok() && trial.is_winner(side)
    }

    /// Move the piece on `source` to `dest` on behalf of `side`.
    ///
    /// A jump names only its final square; the capture chain is worked out from the position.
    /// When the move is rejected the game is left untouched and the reason is returned.
    ///
    /// ```
    /// use checkers::{Error, Game, Side, Square};
    ///
    /// let mut game = Game::default();
    /// let err = game.move_piece(Square::new(5, 0), Square::new(4, 1), Side::Red);
    /// assert_eq!(err, Err(Error::NotYourTurn { side: Side::Red, turn: Side::Black }));
    ///
    /// let outcome = game
    ///     .move_piece(Square::new(2, 1), Square::new(3, 0), Side::Black)
    ///     .expect("legal step");
    /// assert!(!outcome.is_capture());
    /// ```
    pub fn move_piece(
        &mut self,
        source: Square,
        dest: Square,
        side: Side,
    ) -> Result<MoveOutcome, Error> {
        let result = self.apply(source, dest, side);
        if let Err(ref e) = result {
            warn!(%side, %source, %dest, error = %e, "move rejected");
        }
        result
    }

    /// Play `mv` for the side to move.
    pub fn make_move(&mut self, mv: CheckersMove) -> Result<MoveOutcome, Error> {
        let side = self.turn;
        self.move_piece(mv.get_source(), mv.get_dest(), side)
    }

    fn validate(&self, source: Square, dest: Square, side: Side) -> Result<(), Error> {
        if self.is_done() {
            return Err(Error::GameOver {
                status: self.status,
            });
        }
        for square in [source, dest].iter() {
            if !self.board.in_bounds(*square) {
                return Err(Error::InvalidPosition {
                    square: *square,
                    width: self.board.width(),
                });
            }
        }
        let piece = self
            .board
            .get(source)
            .ok_or(Error::EmptySquare { square: source })?;
        if piece.side() != side {
            return Err(Error::WrongSide {
                square: source,
                side,
            });
        }
        if side != self.turn {
            return Err(Error::NotYourTurn {
                side,
                turn: self.turn,
            });
        }
        if !self.is_valid_move(source, dest) {
            return Err(Error::IllegalMove { source, dest });
        }
        Ok(())
    }

    fn apply(&mut self, source: Square, dest: Square, side: Side) -> Result<MoveOutcome, Error> {
        self.validate(source, dest, side)?;
        let outcome = execute(&mut self.board, source, dest)?;
        debug!(
            %side,
            mv = %outcome.mv,
            captured = outcome.captured.len(),
            promoted = outcome.promoted,
            "move applied"
        );

        if outcome.is_capture() {
            self.quiet_moves = [0; NUM_SIDES];
        } else {
            self.quiet_moves[side.to_index()] += 1;
        }
        self.wants_draw = [false; NUM_SIDES];
        self.turn = !self.turn;
        self.refresh_status();
        Ok(outcome)
    }

    /// `side` gives up; the other side wins.
    ///
    /// ```
    /// use checkers::{Game, GameStatus, Side};
    ///
    /// let mut game = Game::default();
    /// game.resign(Side::Red).expect("game in progress");
    /// assert_eq!(game.status(), GameStatus::Won(Side::Black));
    /// assert!(game.resign(Side::Black).is_err());
    /// ```
    pub fn resign(&mut self, side: Side) -> Result<(), Error> {
        if self.is_done() {
            return Err(Error::GameOver {
                status: self.status,
            });
        }
        self.status = GameStatus::Won(!side);
        info!(%side, status = %self.status, "resigned");
        Ok(())
    }

    /// `side` proposes a draw.  The game is drawn as soon as both sides want it.
    ///
    /// ```
    /// use checkers::{Game, GameStatus, Side};
    ///
    /// let mut game = Game::default();
    /// game.draw(Side::Black).expect("game in progress");
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// game.respond_to_draw(Side::Red, true).expect("game in progress");
    /// assert_eq!(game.status(), GameStatus::Drawn);
    /// ```
    pub fn draw(&mut self, side: Side) -> Result<(), Error> {
        if self.is_done() {
            return Err(Error::GameOver {
                status: self.status,
            });
        }
        debug!(%side, "draw offered");
        self.agree_to_draw(side);
        Ok(())
    }

    /// Answer a draw proposal.  Declining withdraws every pending proposal.
    pub fn respond_to_draw(&mut self, side: Side, accept: bool) -> Result<(), Error> {
        if self.is_done() {
            return Err(Error::GameOver {
                status: self.status,
            });
        }
        debug!(%side, accept, "draw answered");
        if accept {
            self.agree_to_draw(side);
        } else {
            self.wants_draw = [false; NUM_SIDES];
        }
        Ok(())
    }

    fn agree_to_draw(&mut self, side: Side) {
        self.wants_draw[side.to_index()] = true;
        if self.wants_draw.iter().all(|wants| *wants) {
            self.status = GameStatus::Drawn;
            info!("draw agreed");
        }
    }

    /// Work out whether the position on the board ends the game.
    fn evaluate(&self) -> GameStatus {
        let black = self.board.count(Side::Black) > 0;
        let red = self.board.count(Side::Red) > 0;
        match (black, red) {
            (false, false) => return GameStatus::Drawn,
            (false, true) => return GameStatus::Won(Side::Red),
            (true, false) => return GameStatus::Won(Side::Black),
            (true, true) => {}
        }

        let black = movegen::has_any_move(&self.board, Side::Black);
        let red = movegen::has_any_move(&self.board, Side::Red);
        match (black, red) {
            (false, false) => return GameStatus::Drawn,
            (false, true) => return GameStatus::Won(Side::Red),
            (true, false) => return GameStatus::Won(Side::Black),
            (true, true) => {}
        }

        let quiet: u32 = self.quiet_moves.iter().sum();
        if quiet >= self.config.no_capture_limit {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    fn refresh_status(&mut self) {
        let status = self.evaluate();
        if status.is_over() {
            info!(
                %status,
                black = self.board.count(Side::Black),
                red = self.board.count(Side::Red),
                quiet = self.quiet_moves.iter().sum::<u32>(),
                "game over"
            );
        }
        self.status = status;
    }

    /// Count the move sequences of length `depth` from this position.  Sequences cut short
    /// by the end of the game are not counted.
    ///
    /// ```
    /// use checkers::Game;
    ///
    /// let game = Game::default();
    /// assert_eq!(game.perft(1), 7);
    /// assert_eq!(game.perft(2), 49);
    /// ```
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut result = 0;
        for mv in moves {
            let mut next = self.clone();
            if next
                .apply(mv.get_source(), mv.get_dest(), self.turn)
                .is_ok()
            {
                result += next.perft(depth - 1);
            }
        }
        result
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "{} to move, {}", self.turn, self.status)
    }
}
