//! First-class invariants for Tri-Pawn.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod pawn_count;

pub use pawn_count::{MonotonicPieceCount, PawnLimitInvariant, PawnsRemainInvariant};

/// All board-state invariants as a composable set.
pub type TripawnInvariants = (PawnLimitInvariant, PawnsRemainInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Player};

    #[test]
    fn test_invariant_set_holds_for_start() {
        assert!(TripawnInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let violations = TripawnInvariants::check_all(&Board::empty()).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, PawnsRemainInvariant::description());

        let mut crowded = Board::new();
        crowded.set(Cell::new(0, 1), Player::White.pawn()).unwrap();
        let violations = TripawnInvariants::check_all(&crowded).unwrap_err();
        assert_eq!(violations[0].description, PawnLimitInvariant::description());
    }
}
