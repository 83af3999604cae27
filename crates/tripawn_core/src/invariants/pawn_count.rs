//! Pawn-count invariants: pawns are only ever removed, never created.

use super::Invariant;
use crate::{Board, Player};
use strum::IntoEnumIterator;

/// Pawns each side starts with.
const PAWNS_PER_SIDE: usize = 3;

/// Invariant: neither side ever holds more than its three starting pawns.
pub struct PawnLimitInvariant;

impl Invariant<Board> for PawnLimitInvariant {
    fn holds(board: &Board) -> bool {
        Player::iter().all(|player| board.count(player) <= PAWNS_PER_SIDE)
    }

    fn description() -> &'static str {
        "Each side holds at most three pawns"
    }
}

/// Invariant: the board is never empty.
///
/// A capture replaces the captured pawn with the capturing one, so the
/// last pawn standing can never be removed.
pub struct PawnsRemainInvariant;

impl Invariant<Board> for PawnsRemainInvariant {
    fn holds(board: &Board) -> bool {
        board.piece_count() > 0
    }

    fn description() -> &'static str {
        "At least one pawn remains on the board"
    }
}

/// Transition property: a single move removes at most one pawn and never adds one.
pub struct MonotonicPieceCount;

impl MonotonicPieceCount {
    /// Checks the property across one move.
    pub fn holds(before: &Board, after: &Board) -> bool {
        let (before, after) = (before.piece_count(), after.piece_count());
        after <= before && before - after <= 1
    }

    /// Human-readable description of the property.
    pub fn description() -> &'static str {
        "Piece count never increases and drops by at most one per move"
    }
}
