//! Terminal-state detection and winner attribution.

use super::moves::has_any_legal_move;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// State of a game as seen from the player about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Nobody has won yet.
    InProgress,
    /// The player has won.
    Win(Player),
    /// Neither side can move.
    Stalemate,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            GameOutcome::InProgress | GameOutcome::Stalemate => None,
        }
    }

    /// Returns true once the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "{} wins", player),
            GameOutcome::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// How a position where neither side can move is scored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum StalemateRule {
    /// Mutual blockade is a stalemate with no winner.
    #[default]
    Draw,
    /// Mutual blockade is won by the player who made the last move.
    MoverWins,
}

/// Returns the player with a pawn on the opponent's home row, if any.
///
/// `first` is checked before its opponent.
#[instrument(skip(board))]
pub fn breakthrough(board: &Board, first: Player) -> Option<Player> {
    [first, first.opponent()].into_iter().find(|&player| {
        board
            .occupied_by(player)
            .iter()
            .any(|cell| cell.y == player.target_row())
    })
}

/// Evaluates the position for the player about to move (`next`).
///
/// Checks, in order: breakthrough (the player who just moved first), a
/// side with no pawns left, then mobility. When exactly one side can still
/// move, that side wins; when neither can, `rule` decides.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board, next: Player, rule: StalemateRule) -> GameOutcome {
    let mover = next.opponent();

    if let Some(winner) = breakthrough(board, mover) {
        debug!(%winner, "Breakthrough");
        return GameOutcome::Win(winner);
    }

    if board.count(next) == 0 {
        debug!(winner = %mover, "All pawns captured");
        return GameOutcome::Win(mover);
    }
    if board.count(mover) == 0 {
        debug!(winner = %next, "All pawns captured");
        return GameOutcome::Win(next);
    }

    let next_can_move = has_any_legal_move(board, next);
    let mover_can_move = has_any_legal_move(board, mover);

    match (next_can_move, mover_can_move) {
        (true, true) => GameOutcome::InProgress,
        (true, false) => GameOutcome::Win(next),
        (false, true) => GameOutcome::Win(mover),
        (false, false) => match rule {
            StalemateRule::Draw => GameOutcome::Stalemate,
            StalemateRule::MoverWins => GameOutcome::Win(mover),
        },
    }
}
