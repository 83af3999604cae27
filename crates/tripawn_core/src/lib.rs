//! Tri-Pawn core - rules engine and turn state machine for hexapawn
//!
//! Three pawns a side on a 3x3 board. Pawns step forward into empty cells
//! and capture diagonally forward. A side wins by reaching the far row,
//! by capturing every enemy pawn, or by leaving the opponent without a move.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] (legal moves, outcome)
//! - **Engine**: board plus side to move, with contract-checked moves
//! - **Session**: Menu → Playing → GameOver state machine, computer opponent
//!   and deferred move commit driven by a tick clock
//!
//! The crate does no I/O besides optional config loading; front-ends feed
//! intents and a monotonic clock in and read a [`Snapshot`] back out.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tripawn_core::{Cell, ClickOutcome, GameSession, GameState, Mode, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::new().with_seed(42));
//! session.choose_mode(Mode::TwoPlayer);
//! assert_eq!(session.state(), GameState::Playing);
//!
//! assert_eq!(session.cell_clicked(Cell::new(1, 2)), ClickOutcome::Selected(Cell::new(1, 2)));
//! assert!(matches!(session.cell_clicked(Cell::new(1, 1)), ClickOutcome::Moved(_)));
//! session.tick(Duration::from_millis(16));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod computer;
mod config;
mod engine;
mod rng;
mod session;
mod snapshot;
mod types;

// Public modules with their own vocabulary
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Board primitives
pub use types::{BOARD_SIZE, Board, BoardError, Cell, Occupant, Player};

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - Engine and outcome
pub use engine::GameEngine;
pub use rules::{GameOutcome, StalemateRule};

// Crate-level exports - Computer player
pub use computer::RandomMover;
pub use rng::GameRng;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Session state machine
pub use session::{ClickOutcome, GameSession, GameState, Mode};
pub use snapshot::{InFlightMove, PendingMove, PointerState, Snapshot};
