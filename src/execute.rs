use crate::board::Board;
use crate::checkers_move::CheckersMove;
use crate::error::Error;
use crate::movegen::capture_trail;
use crate::side::Side;
use crate::square::Square;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// What playing a move did to the board.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub side: Side,
    pub mv: CheckersMove,
    /// Squares of the pieces captured, in the order they were jumped.
    pub captured: Vec<Square>,
    /// Did the moving piece become a king?
    pub promoted: bool,
}

impl MoveOutcome {
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// Apply an already validated move: remove every captured piece, relocate the mover and crown it
/// if it reached the far row.
///
/// Everything that can fail is worked out before the board is touched, so the board is either
/// fully updated or left exactly as it was.
pub(crate) fn execute(board: &mut Board, source: Square, dest: Square) -> Result<MoveOutcome, Error> {
    let id = board
        .id_at(source)
        .ok_or(Error::EmptySquare { square: source })?;
    let piece = *board.piece(id);
    let side = piece.side();

    let captured = if source.row_distance(dest) == 1 {
        vec![]
    } else {
        capture_trail(board, source, dest)
            .ok_or(Error::IllegalMove { source, dest })?
            .captures(source)
    };
    debug_assert!(captured
        .iter()
        .all(|sq| board.get(*sq).map(|p| p.side()) == Some(!side)));

    for square in captured.iter() {
        let removed = board.clear(*square);
        debug_assert!(removed.is_some());
    }
    board.relocate(id, dest);

    let promoted = !piece.is_king()
        && dest.row() == side.to_promotion_row(board.width())
        && board.crown(id);

    Ok(MoveOutcome {
        side,
        mv: CheckersMove::new(source, dest),
        captured,
        promoted,
    })
}
