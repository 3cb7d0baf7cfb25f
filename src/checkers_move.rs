use crate::square::Square;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a move in memory: where the piece starts and where it finally lands.  A capture
/// chain is described by its endpoints only; the engine reconstructs the hops.
#[derive(Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Default, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CheckersMove {
    source: Square,
    dest: Square,
}

impl CheckersMove {
    /// Create a new move, given a source `Square` and a destination `Square`.
    #[inline]
    pub fn new(source: Square, dest: Square) -> CheckersMove {
        CheckersMove { source, dest }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }

    /// A move more than one row long can only be a jump.
    #[inline]
    pub fn is_jump(&self) -> bool {
        self.source.row_distance(self.dest) != 1
    }
}

impl fmt::Display for CheckersMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.dest)
    }
}
