//! Pawn movement geometry.

use crate::action::Move;
use crate::types::{Board, Cell, Occupant, Player};
use tracing::instrument;

/// Legal destinations for a pawn of `player` standing on `cell`.
///
/// A pawn may step forward onto an empty cell, or step diagonally forward
/// onto a cell holding an opposing pawn. Destinations are returned in the
/// order forward, forward-left, forward-right, without duplicates, so there
/// are never more than three.
///
/// The occupant of `cell` itself is not checked; callers only ask about
/// cells the mover owns. An off-board `cell` has no moves.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, cell: Cell, player: Player) -> Vec<Cell> {
    let mut destinations = Vec::with_capacity(3);

    if !cell.in_bounds() {
        return destinations;
    }

    // Pawns on the far row have nowhere to go.
    let Some(ahead) = cell.offset(0, player.forward()) else {
        return destinations;
    };

    if board.is_empty(ahead) {
        destinations.push(ahead);
    }

    let opponent = player.opponent().pawn();
    for dx in [-1, 1] {
        if let Some(diagonal) = ahead.offset(dx, 0)
            && board.get(diagonal) == Ok(opponent)
        {
            destinations.push(diagonal);
        }
    }

    destinations
}

/// Checks if any of `player`'s pawns has at least one legal move.
#[instrument(skip(board))]
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    board
        .occupied_by(player)
        .into_iter()
        .any(|cell| !legal_moves(board, cell, player).is_empty())
}

/// Every legal move available to `player`, grouped by source cell in
/// row-major order.
#[instrument(skip(board))]
pub fn all_legal_moves(board: &Board, player: Player) -> Vec<Move> {
    board
        .occupied_by(player)
        .into_iter()
        .flat_map(|source| {
            legal_moves(board, source, player)
                .into_iter()
                .map(move |destination| Move::new(source, destination))
        })
        .collect()
}

/// Checks if `cell` holds a pawn of `player` that can move.
pub fn is_movable(board: &Board, cell: Cell, player: Player) -> bool {
    board.get(cell) == Ok(Occupant::Pawn(player)) && !legal_moves(board, cell, player).is_empty()
}
