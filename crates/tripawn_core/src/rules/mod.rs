//! Game rules for Tri-Pawn.
//!
//! This module contains pure functions over a [`Board`](crate::Board):
//! pawn movement geometry and terminal-state detection. Rules are kept
//! apart from board storage so the engine, the computer player and the
//! contracts can all share them.

pub mod moves;
pub mod outcome;

pub use moves::{all_legal_moves, has_any_legal_move, is_movable, legal_moves};
pub use outcome::{GameOutcome, StalemateRule, breakthrough, evaluate_outcome};
