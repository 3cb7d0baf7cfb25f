#![doc(html_root_url = "https://jordanbray.github.io/checkers/")]
//! # Rust Checkers Library
//!
//! This is a checkers rules engine for square boards of any even size.  It lists every legal
//! move for a side (capture chains included), applies moves atomically, and keeps track of
//! wins and draws.  Choosing a move is left to the caller.
//!
//! ## Example
//!
//! ```
//! use checkers::{Game, Side, Square};
//!
//! let mut game = Game::default();
//! let moves = game.all_team_moves(Side::Black);
//! assert_eq!(moves[&Square::new(2, 1)], vec![Square::new(3, 0), Square::new(3, 2)]);
//!
//! game.move_piece(Square::new(2, 1), Square::new(3, 2), Side::Black).expect("legal step");
//! assert_eq!(game.turn(), Side::Red);
//! ```

mod side;
pub use crate::side::*;

mod square;
pub use crate::square::*;

mod direction;
pub use crate::direction::*;

mod piece;
pub use crate::piece::*;

mod error;
pub use crate::error::*;

mod config;
pub use crate::config::*;

mod board;
pub use crate::board::*;

mod board_builder;
pub use crate::board_builder::*;

mod checkers_move;
pub use crate::checkers_move::*;

mod movegen;
pub use crate::movegen::trail::Trail;
pub use crate::movegen::{all_team_moves, capture_trail, has_any_move, has_capture, list_moves, MoveGen};

mod execute;
pub use crate::execute::MoveOutcome;

mod game;
pub use crate::game::*;
