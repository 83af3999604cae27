//! Tri-Pawn game engine: the board plus whose turn it is.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{self, GameOutcome, StalemateRule};
use super::types::{Board, Cell, Occupant, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Owns the current board and current player, applies moves and scores positions.
///
/// The engine never advances the turn on its own; callers switch players
/// after a move has been applied successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
}

impl GameEngine {
    /// Creates an engine with the starting layout and White to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_position(Board::new(), Player::White)
    }

    /// Creates an engine from an arbitrary position.
    pub fn from_position(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Legal destinations for the pawn on `cell`, moving as the current player.
    pub fn legal_moves(&self, cell: Cell) -> Vec<Cell> {
        rules::legal_moves(&self.board, cell, self.current_player)
    }

    /// Moves the current player's pawn from `source` to `destination`.
    ///
    /// Whatever stood on the destination is overwritten, which is how
    /// captures remove pawns. Returns the owner of the captured pawn, if any.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either cell is off the board
    /// - [`MoveError::IllegalMove`] if the source is not the current player's
    ///   pawn or the destination is not a legal move for it
    ///
    /// On error the engine is left unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(
        &mut self,
        source: Cell,
        destination: Cell,
    ) -> Result<Option<Player>, MoveError> {
        let action = Move::new(source, destination);

        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let pawn = self.board.get(source)?;
        let captured = self.board.get(destination)?.player();
        self.board.set(destination, pawn)?;
        self.board.set(source, Occupant::Empty)?;

        #[cfg(debug_assertions)]
        {
            if let Err(err) = MoveContract::post(&before, self) {
                *self = before;
                return Err(err);
            }
        }

        debug!(%action, ?captured, board = %self.board, "Move applied");
        Ok(captured)
    }

    /// Hands the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Scores the position for `next`, treating mutual blockade as a stalemate.
    pub fn evaluate_outcome(&self, next: Player) -> GameOutcome {
        self.evaluate_outcome_with(next, StalemateRule::Draw)
    }

    /// Scores the position for `next` using the given stalemate rule.
    pub fn evaluate_outcome_with(&self, next: Player, rule: StalemateRule) -> GameOutcome {
        rules::evaluate_outcome(&self.board, next, rule)
    }

    /// Restores the starting layout with White to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::White;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_does_not_switch_player() {
        let mut engine = GameEngine::new();
        engine.apply_move(Cell::new(1, 2), Cell::new(1, 1)).unwrap();
        assert_eq!(engine.current_player(), Player::White);
        engine.switch_player();
        assert_eq!(engine.current_player(), Player::Black);
    }

    #[test]
    fn test_rejected_move_leaves_engine_unchanged() {
        let mut engine = GameEngine::new();
        let snapshot = engine.clone();
        let result = engine.apply_move(Cell::new(1, 0), Cell::new(1, 1));
        assert!(matches!(result, Err(MoveError::IllegalMove(_))));
        assert_eq!(engine, snapshot);
    }

    #[test]
    fn test_capture_reports_captured_player() {
        let mut engine = GameEngine::new();
        engine.apply_move(Cell::new(0, 2), Cell::new(0, 1)).unwrap();
        engine.switch_player();
        let captured = engine.apply_move(Cell::new(1, 0), Cell::new(0, 1)).unwrap();
        assert_eq!(captured, Some(Player::White));
        assert_eq!(engine.board().count(Player::White), 2);
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new();
        engine.apply_move(Cell::new(2, 2), Cell::new(2, 1)).unwrap();
        engine.switch_player();
        engine.reset();
        assert_eq!(engine, GameEngine::new());
    }
}
