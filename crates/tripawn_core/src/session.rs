//! Game session: the Menu → Playing → GameOver → Menu state machine.
//!
//! A [`GameSession`] is owned by the front-end and driven by two kinds of
//! input: discrete intents (mode chosen, cell clicked, game-over
//! acknowledged, pointer events) and a monotonic [`tick`](GameSession::tick)
//! clock. Computer moves are chosen on one tick and committed on the first
//! tick at or past the configured delay; human input is ignored meanwhile.

use crate::action::Move;
use crate::computer::RandomMover;
use crate::config::SessionConfig;
use crate::engine::GameEngine;
use crate::rng::GameRng;
use crate::rules::{self, GameOutcome};
use crate::snapshot::{InFlightMove, PendingMove, PointerState, Snapshot};
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Number of human players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mode {
    /// One human against the random computer.
    #[default]
    #[strum(to_string = "1 - Player")]
    OnePlayer,
    /// Two humans sharing the board.
    #[strum(to_string = "2 - Player")]
    TwoPlayer,
}

impl Mode {
    /// Maps a player count (1 or 2) to a mode.
    pub fn from_players(players: u8) -> Option<Self> {
        match players {
            1 => Some(Mode::OnePlayer),
            2 => Some(Mode::TwoPlayer),
            _ => None,
        }
    }
}

/// Outer state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for a mode to be chosen.
    Menu,
    /// A game is under way.
    Playing,
    /// The game has ended; `winner` is `None` for a stalemate.
    GameOver {
        /// The winning side, if any.
        winner: Option<Player>,
    },
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Menu => write!(f, "Main Menu"),
            GameState::Playing => write!(f, "Playing"),
            GameState::GameOver { .. } => write!(f, "Game Over!"),
        }
    }
}

/// What a board click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// The pawn on this cell is now selected.
    Selected(Cell),
    /// The selected pawn moved.
    Moved(Move),
}

/// A single game session, owned by the front-end.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    mode: Mode,
    engine: GameEngine,
    selected: Option<Cell>,
    pending: Option<PendingMove>,
    pointer: PointerState,
    computer: RandomMover,
    now: Duration,
}

impl GameSession {
    /// Creates a session sitting at the menu.
    #[instrument(skip(config))]
    pub fn new(config: SessionConfig) -> Self {
        let rng = match *config.seed() {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "Creating game session");
        Self {
            config,
            state: GameState::Menu,
            mode: Mode::default(),
            engine: GameEngine::new(),
            selected: None,
            pending: None,
            pointer: PointerState::default(),
            computer: RandomMover::new(rng),
            now: Duration::ZERO,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the outer game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.engine.current_player()
    }

    /// Returns the selected cell.
    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    /// Returns the winner once the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::GameOver { winner } => winner,
            GameState::Menu | GameState::Playing => None,
        }
    }

    /// Returns the computer move waiting to be committed.
    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    /// Returns the last known pointer state.
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Checks if the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.state == GameState::Playing
            && self.mode == Mode::OnePlayer
            && self.current_player() == *self.config.computer_player()
    }

    /// Checks if a human click would currently be considered.
    pub fn accepts_input(&self) -> bool {
        self.state == GameState::Playing && self.pending.is_none() && !self.is_computer_turn()
    }

    // ─────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────

    /// Menu → Playing. Resets the board with White to move.
    ///
    /// Returns `false` (and does nothing) outside the menu.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn choose_mode(&mut self, mode: Mode) -> bool {
        if self.state != GameState::Menu {
            debug!("Mode choice ignored outside the menu");
            return false;
        }

        self.engine.reset();
        self.mode = mode;
        self.selected = None;
        self.pending = None;
        self.state = GameState::Playing;
        info!(%mode, "Game started");
        true
    }

    /// GameOver → Menu.
    ///
    /// Returns `false` (and does nothing) unless the game is over.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn acknowledge(&mut self) -> bool {
        if !matches!(self.state, GameState::GameOver { .. }) {
            return false;
        }
        self.state = GameState::Menu;
        self.selected = None;
        info!("Returned to menu");
        true
    }

    /// Handles a click on a board cell during a human turn.
    ///
    /// With nothing selected, a movable pawn of the current player becomes
    /// selected. With a pawn selected, clicking one of its legal destinations
    /// plays the move and passes the turn; clicking another movable pawn
    /// moves the selection; anything else is ignored and the selection stays.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn cell_clicked(&mut self, cell: Cell) -> ClickOutcome {
        if !cell.in_bounds() {
            warn!(%cell, "Ignoring click off the board");
            return ClickOutcome::Ignored;
        }
        if !self.accepts_input() {
            debug!("Ignoring click: not accepting input");
            return ClickOutcome::Ignored;
        }

        let player = self.current_player();

        if let Some(from) = self.selected
            && self.engine.legal_moves(from).contains(&cell)
        {
            return match self.engine.apply_move(from, cell) {
                Ok(captured) => {
                    let action = Move::new(from, cell);
                    info!(%action, ?captured, "Player moved");
                    self.selected = None;
                    self.finish_turn();
                    ClickOutcome::Moved(action)
                }
                Err(err) => {
                    warn!(error = %err, "Move rejected");
                    ClickOutcome::Ignored
                }
            };
        }

        if rules::is_movable(self.board(), cell, player) {
            debug!(%cell, "Pawn selected");
            self.selected = Some(cell);
            return ClickOutcome::Selected(cell);
        }

        ClickOutcome::Ignored
    }

    /// Advances the session clock.
    ///
    /// On the computer's turn this chooses a move (if none is pending) and
    /// commits it once the configured delay has elapsed since it was chosen.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, now: Duration) {
        self.now = now;

        if self.state != GameState::Playing {
            return;
        }

        if self.pending.is_none() && self.is_computer_turn() {
            self.schedule_computer_move(now);
        }

        if let Some(pending) = self.pending
            && pending.is_due(now)
        {
            self.pending = None;
            self.commit_computer_move(pending.action);
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Pointer events
    // ─────────────────────────────────────────────────────────

    /// Records a pointer press.
    pub fn pointer_down(&mut self) {
        self.pointer.pressed = true;
    }

    /// Records a pointer release.
    pub fn pointer_up(&mut self) {
        self.pointer.pressed = false;
    }

    /// Records pointer movement.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.pointer.x = x;
        self.pointer.y = y;
        self.pointer.present = true;
    }

    /// Records the pointer entering the playing surface.
    pub fn pointer_enter(&mut self, x: i32, y: i32) {
        self.pointer_move(x, y);
    }

    /// Records the pointer leaving the playing surface.
    pub fn pointer_leave(&mut self) {
        self.pointer.present = false;
        self.pointer.pressed = false;
    }

    // ─────────────────────────────────────────────────────────
    //  Views
    // ─────────────────────────────────────────────────────────

    /// Cells a renderer should highlight.
    ///
    /// With a pawn selected, its legal destinations; otherwise the hovered
    /// cell if it holds a movable pawn of the current player.
    pub fn highlighted_cells(&self, hover: Option<Cell>) -> Vec<Cell> {
        if !self.accepts_input() {
            return Vec::new();
        }
        match (self.selected, hover) {
            (Some(from), _) => self.engine.legal_moves(from),
            (None, Some(cell)) if rules::is_movable(self.board(), cell, self.current_player()) => {
                vec![cell]
            }
            _ => Vec::new(),
        }
    }

    /// The pending computer move as seen at the last tick.
    pub fn in_flight(&self) -> Option<InFlightMove> {
        self.pending.map(|pending| InFlightMove {
            source: pending.action.source,
            destination: pending.action.destination,
            progress: pending.progress(self.now),
        })
    }

    /// Everything a renderer needs for one frame.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board().clone(),
            current_player: self.current_player(),
            state: self.state,
            selected: self.selected,
            winner: self.winner(),
            mode: self.mode,
            in_flight: self.in_flight(),
            pointer: self.pointer,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────

    fn schedule_computer_move(&mut self, now: Duration) {
        let player = self.current_player();
        match self.computer.select_move(self.engine.board(), player) {
            Some(action) => {
                debug!(%action, "Computer move scheduled");
                self.pending = Some(PendingMove {
                    action,
                    started_at: now,
                    duration: self.config.computer_delay(),
                });
            }
            None => warn!(%player, "Computer has no legal move"),
        }
    }

    fn commit_computer_move(&mut self, action: Move) {
        match self.engine.apply_move(action.source, action.destination) {
            Ok(captured) => {
                info!(%action, ?captured, "Computer moved");
                self.finish_turn();
            }
            Err(err) => warn!(error = %err, %action, "Computer move rejected"),
        }
    }

    /// Passes the turn and ends the game if the new player faces a terminal position.
    fn finish_turn(&mut self) {
        self.engine.switch_player();
        let next = self.current_player();
        let outcome = self
            .engine
            .evaluate_outcome_with(next, *self.config.stalemate_rule());

        if outcome.is_terminal() {
            let winner = outcome.winner();
            info!(%outcome, board = %self.board(), "Game over");
            self.selected = None;
            self.state = GameState::GameOver { winner };
        } else {
            debug_assert_eq!(outcome, GameOutcome::InProgress);
            debug!(%next, "Next turn");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
