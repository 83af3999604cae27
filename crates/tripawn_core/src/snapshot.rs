//! Read-only views handed to renderers.

use crate::action::Move;
use crate::session::{GameState, Mode};
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Last known pointer position, in the front-end's own coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerState {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
    /// Whether a pointer is over the playing surface.
    pub present: bool,
    /// Whether the pointer is pressed.
    pub pressed: bool,
}

/// A computer move that has been chosen but not yet committed to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    /// The chosen move.
    pub action: Move,
    /// Tick clock reading when the move was chosen.
    pub started_at: Duration,
    /// How long to wait before committing.
    pub duration: Duration,
}

impl PendingMove {
    /// Fraction of the wait that has elapsed at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Checks if the move should be committed at `now`.
    pub fn is_due(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }
}

/// A pending move as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InFlightMove {
    /// Cell the pawn is sliding from.
    pub source: Cell,
    /// Cell the pawn is sliding to.
    pub destination: Cell,
    /// Progress of the slide, `0.0` to `1.0`.
    pub progress: f32,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Player to move.
    pub current_player: Player,
    /// Outer game state.
    pub state: GameState,
    /// Selected pawn, if any.
    pub selected: Option<Cell>,
    /// Winner once the game is over (`None` for a stalemate or while playing).
    pub winner: Option<Player>,
    /// One- or two-player mode.
    pub mode: Mode,
    /// Computer move waiting to be committed.
    pub in_flight: Option<InFlightMove>,
    /// Last known pointer state.
    pub pointer: PointerState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(started_ms: u64, duration_ms: u64) -> PendingMove {
        PendingMove {
            action: Move::new(Cell::new(0, 0), Cell::new(0, 1)),
            started_at: Duration::from_millis(started_ms),
            duration: Duration::from_millis(duration_ms),
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        let mv = pending(1000, 500);
        assert_eq!(mv.progress(Duration::from_millis(900)), 0.0);
        assert_eq!(mv.progress(Duration::from_millis(1250)), 0.5);
        assert_eq!(mv.progress(Duration::from_millis(4000)), 1.0);
    }

    #[test]
    fn test_due_at_deadline() {
        let mv = pending(1000, 500);
        assert!(!mv.is_due(Duration::from_millis(1499)));
        assert!(mv.is_due(Duration::from_millis(1500)));
    }

    #[test]
    fn test_zero_duration_is_immediately_done() {
        let mv = pending(10, 0);
        assert!(mv.is_due(Duration::from_millis(10)));
        assert_eq!(mv.progress(Duration::from_millis(10)), 1.0);
    }
}
