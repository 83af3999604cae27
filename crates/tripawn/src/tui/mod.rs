//! Terminal UI for Tri-Pawn

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};
use tripawn_core::{GameSession, SessionConfig};

use app::App;

/// How long to wait for input before drawing the next frame.
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Runs the game until the user quits.
#[instrument(skip(config))]
pub fn run(config: SessionConfig) -> Result<()> {
    info!("Starting Tri-Pawn TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(GameSession::new(config));
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Draw, poll input, tick; one frame per iteration.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(FRAME_TIME)? {
            app.handle_event(event::read()?);
        }

        app.tick();

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
