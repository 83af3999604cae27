//! Contract-based validation for Tri-Pawn moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::engine::GameEngine;
use super::invariants::{InvariantSet, MonotonicPieceCount, TripawnInvariants};
use super::rules::legal_moves;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: both cells of the move are on the board.
pub struct CellsOnBoard;

impl CellsOnBoard {
    /// Checks the precondition.
    #[instrument]
    pub fn check(mov: &Move) -> Result<(), MoveError> {
        for cell in [mov.source, mov.destination] {
            if !cell.in_bounds() {
                return Err(MoveError::OutOfBounds(cell));
            }
        }
        Ok(())
    }
}

/// Precondition: the source cell holds a pawn of the player to move.
pub struct MoverOwnsPawn;

impl MoverOwnsPawn {
    /// Checks the precondition.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        let pawn = engine.current_player().pawn();
        if engine.board().get(mov.source)? != pawn {
            Err(MoveError::IllegalMove(*mov))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the destination is reachable under the movement rules.
pub struct DestinationIsLegal;

impl DestinationIsLegal {
    /// Checks the precondition.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        let destinations = legal_moves(engine.board(), mov.source, engine.current_player());
        if destinations.contains(&mov.destination) {
            Ok(())
        } else {
            Err(MoveError::IllegalMove(*mov))
        }
    }
}

/// Composite precondition: cells on the board, pawn owned by the mover, legal destination.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        CellsOnBoard::check(mov)?;
        MoverOwnsPawn::check(mov, engine)?;
        DestinationIsLegal::check(mov, engine)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Both cells on the board
/// - Source holds the mover's pawn
/// - Destination is a legal forward step or capture
///
/// Postconditions:
/// - Piece count did not increase and dropped by at most one
/// - Board-state invariants still hold
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(engine: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        if !MonotonicPieceCount::holds(before.board(), after.board()) {
            warn!(before = %before.board(), after = %after.board(), "Piece count check failed");
            return Err(MoveError::InvariantViolation(
                MonotonicPieceCount::description().to_string(),
            ));
        }

        TripawnInvariants::check_all(after.board()).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
