//! Uniform-random computer opponent.

use crate::action::Move;
use crate::rng::GameRng;
use crate::rules::legal_moves;
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Computer player that picks a random movable pawn, then a random destination.
#[derive(Debug, Clone)]
pub struct RandomMover {
    rng: GameRng,
}

impl RandomMover {
    /// Creates a mover drawing from `rng`.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Returns the underlying RNG seed.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Picks a move for `player`, or `None` if none of its pawns can move.
    ///
    /// Pawns are drawn at random without replacement until one with a legal
    /// move turns up, so every movable pawn is equally likely; a destination
    /// is then drawn uniformly from that pawn's legal moves.
    #[instrument(skip(self, board))]
    pub fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        let mut candidates = board.occupied_by(player);

        while !candidates.is_empty() {
            let index = self.rng.gen_range_usize(0..candidates.len());
            let source = candidates.swap_remove(index);

            let destinations = legal_moves(board, source, player);
            if let Some(&destination) = self.rng.choose(&destinations) {
                let choice = Move::new(source, destination);
                debug!(%choice, "Computer chose move");
                return Some(choice);
            }
            debug!(%source, "Pawn cannot move, retrying");
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Occupant};

    const B: Occupant = Occupant::Pawn(Player::Black);
    const W: Occupant = Occupant::Pawn(Player::White);
    const E: Occupant = Occupant::Empty;

    #[test]
    fn test_choices_are_legal() {
        // Black has captures from every pawn and a forward step on (2, 0).
        let board = Board::from_rows([[B, B, B], [W, W, E], [E, E, E]]);
        let mut mover = RandomMover::new(GameRng::new(3));
        for _ in 0..50 {
            let choice = mover.select_move(&board, Player::Black).unwrap();
            let destinations = legal_moves(&board, choice.source, Player::Black);
            assert!(destinations.contains(&choice.destination));
        }
    }

    #[test]
    fn test_no_move_when_blocked() {
        let board = Board::from_rows([[B, E, E], [W, E, E], [E, E, E]]);
        let mut mover = RandomMover::new(GameRng::new(3));
        assert_eq!(mover.select_move(&board, Player::Black), None);
        assert_eq!(mover.select_move(&Board::empty(), Player::White), None);
    }

    #[test]
    fn test_only_pawn_is_chosen() {
        let board = Board::from_rows([[E, E, E], [E, B, E], [E, E, W]]);
        let mut mover = RandomMover::new(GameRng::new(11));
        for _ in 0..20 {
            let choice = mover.select_move(&board, Player::Black).unwrap();
            assert_eq!(choice.source, Cell::new(1, 1));
            assert!([Cell::new(1, 2), Cell::new(2, 2)].contains(&choice.destination));
        }
    }
}
