//! First-class move and move-error types.
//!
//! A move is only an intent: it names a source and a destination cell and
//! is validated against the rules before it touches the board.

use super::types::{BoardError, Cell};
use serde::{Deserialize, Serialize};

/// A pawn move from `source` to `destination`.
///
/// Either a forward step onto an empty cell or a diagonal capture onto an
/// opposing pawn. Moves are computed per query and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the pawn leaves.
    pub source: Cell,
    /// Cell the pawn lands on.
    pub destination: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(source: Cell, destination: Cell) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Checks if the move changes column (i.e. has capture geometry).
    pub fn is_diagonal(&self) -> bool {
        self.source.x != self.destination.x
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A cell of the move lies outside the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(Cell),

    /// The move breaks the movement rules or the source is not the mover's pawn.
    #[display("Illegal move {}", _0)]
    IllegalMove(Move),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds(cell) => MoveError::OutOfBounds(cell),
        }
    }
}
