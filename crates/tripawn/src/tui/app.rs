//! Terminal application state: the session plus cursor, menu and mouse bookkeeping.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};
use tripawn_core::{Cell, ClickOutcome, GameSession, GameState, Mode};

use super::input::move_cursor;
use super::ui::{CELL_HEIGHT, CELL_WIDTH};

/// Application state for the terminal front-end.
pub struct App {
    session: GameSession,
    cursor: Cell,
    menu_choice: Mode,
    board_area: Option<Rect>,
    menu_area: Option<Rect>,
    started: Instant,
    should_quit: bool,
}

impl App {
    /// Creates the app around a fresh session.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: Cell::new(1, 2),
            menu_choice: Mode::default(),
            board_area: None,
            menu_area: None,
            started: Instant::now(),
            should_quit: false,
        }
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the keyboard cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Returns the highlighted menu entry.
    pub fn menu_choice(&self) -> Mode {
        self.menu_choice
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board cells were drawn, for mouse hit-testing.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = Some(area);
    }

    /// Records where the menu entries were drawn, one row per mode.
    pub fn set_menu_area(&mut self, area: Rect) {
        self.menu_area = Some(area);
    }

    /// Maps a terminal position to the menu entry drawn there.
    pub fn menu_entry_at(&self, column: u16, row: u16) -> Option<Mode> {
        let area = self.menu_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        Mode::iter().nth(usize::from(row - area.y))
    }

    /// Maps a terminal position to the board cell drawn there.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Cell> {
        let area = self.board_area?;
        if column < area.x || row < area.y {
            return None;
        }
        let x = i8::try_from((column - area.x) / CELL_WIDTH).ok()?;
        let y = i8::try_from((row - area.y) / CELL_HEIGHT).ok()?;
        let cell = Cell::new(x, y);
        cell.in_bounds().then_some(cell)
    }

    /// Board cell under the mouse pointer, if the pointer is over one.
    pub fn hovered_cell(&self) -> Option<Cell> {
        let pointer = self.session.pointer();
        if !pointer.present {
            return None;
        }
        let column = u16::try_from(pointer.x).ok()?;
        let row = u16::try_from(pointer.y).ok()?;
        self.cell_at(column, row)
    }

    /// Advances the session clock to the time elapsed since start-up.
    pub fn tick(&mut self) {
        self.session.tick(self.started.elapsed());
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => self.session.pointer_leave(),
            _ => {}
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(state = %self.session.state()))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        match self.session.state() {
            GameState::Menu => self.handle_menu_key(key.code),
            GameState::Playing => self.handle_playing_key(key.code),
            GameState::GameOver { .. } => {
                self.session.acknowledge();
            }
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down => {
                self.menu_choice = Mode::iter()
                    .find(|mode| *mode != self.menu_choice)
                    .unwrap_or(self.menu_choice);
            }
            KeyCode::Enter => self.start(self.menu_choice),
            KeyCode::Char(c) => {
                if let Some(mode) = c
                    .to_digit(10)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .and_then(Mode::from_players)
                {
                    self.start(mode);
                }
            }
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            _ => {}
        }
    }

    /// Handles a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.track_pointer(mouse.column, mouse.row);
                self.session.pointer_down();
                match self.session.state() {
                    GameState::Playing => {
                        if let Some(cell) = self.cell_at(mouse.column, mouse.row) {
                            self.cursor = cell;
                            self.click(cell);
                        }
                    }
                    GameState::GameOver { .. } => {
                        self.session.acknowledge();
                    }
                    GameState::Menu => {
                        if let Some(mode) = self.menu_entry_at(mouse.column, mouse.row) {
                            info!(%mode, "Mode clicked");
                            self.start(mode);
                        }
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.session.pointer_up(),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.track_pointer(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn track_pointer(&mut self, column: u16, row: u16) {
        let (x, y) = (i32::from(column), i32::from(row));
        if self.session.pointer().present {
            self.session.pointer_move(x, y);
        } else {
            self.session.pointer_enter(x, y);
        }
    }

    fn start(&mut self, mode: Mode) {
        if self.session.choose_mode(mode) {
            self.menu_choice = mode;
            self.cursor = Cell::new(1, 2);
        }
    }

    fn click(&mut self, cell: Cell) {
        let outcome = self.session.cell_clicked(cell);
        debug!(%cell, ?outcome, "Board click");
        if let ClickOutcome::Moved(action) = outcome {
            info!(%action, "Human moved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tripawn_core::{Player, SessionConfig};

    fn app() -> App {
        App::new(GameSession::new(SessionConfig::new().with_seed(5)))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    #[test]
    fn test_number_keys_choose_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session().state(), GameState::Playing);
        assert_eq!(app.session().mode(), Mode::TwoPlayer);
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.session().state(), GameState::Menu);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu_choice(), Mode::TwoPlayer);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.menu_choice(), Mode::OnePlayer);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().mode(), Mode::OnePlayer);
    }

    #[test]
    fn test_keyboard_move() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.cursor(), Cell::new(1, 2));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().selected(), Some(Cell::new(1, 2)));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session().current_player(), Player::Black);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_cell_hit_testing() {
        let mut app = app();
        assert_eq!(app.cell_at(5, 5), None);

        app.set_board_area(Rect::new(10, 4, CELL_WIDTH * 3, CELL_HEIGHT * 3));
        assert_eq!(app.cell_at(10, 4), Some(Cell::new(0, 0)));
        assert_eq!(
            app.cell_at(10 + CELL_WIDTH * 2, 4 + CELL_HEIGHT),
            Some(Cell::new(2, 1))
        );
        assert_eq!(app.cell_at(9, 4), None);
        assert_eq!(app.cell_at(10 + CELL_WIDTH * 3, 4), None);
    }

    #[test]
    fn test_mouse_click_moves_pawn() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        app.set_board_area(Rect::new(0, 0, CELL_WIDTH * 3, CELL_HEIGHT * 3));

        mouse(&mut app, MouseEventKind::Moved, 1, CELL_HEIGHT * 2 + 1);
        assert_eq!(app.hovered_cell(), Some(Cell::new(0, 2)));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 1, CELL_HEIGHT * 2 + 1);
        assert!(app.session().pointer().pressed);
        assert_eq!(app.session().selected(), Some(Cell::new(0, 2)));
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 1, CELL_HEIGHT * 2 + 1);

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 1, CELL_HEIGHT + 1);
        assert_eq!(app.session().current_player(), Player::Black);
        assert_eq!(app.cursor(), Cell::new(0, 1));

        app.handle_event(Event::FocusLost);
        assert_eq!(app.hovered_cell(), None);
    }

    #[test]
    fn test_mouse_click_chooses_mode() {
        let mut app = app();
        app.set_menu_area(Rect::new(20, 8, 26, 4));

        // Outside the entries.
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 2, 2);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 21, 11);
        assert_eq!(app.session().state(), GameState::Menu);
        assert_eq!(app.menu_entry_at(21, 8), Some(Mode::OnePlayer));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 24, 9);
        assert_eq!(app.session().state(), GameState::Playing);
        assert_eq!(app.session().mode(), Mode::TwoPlayer);
        assert_eq!(app.menu_choice(), Mode::TwoPlayer);
    }
}
