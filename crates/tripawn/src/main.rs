//! Tri-Pawn Challenge - terminal front-end
//!
//! Loads a session config, applies command-line overrides and runs the
//! game in a ratatui terminal UI. Logs go to a file so they never draw over
//! the board.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use tripawn_core::SessionConfig;

const RULES: &str = "\
TRI-PAWN CHALLENGE

Each side has three pawns on a 3x3 board. White starts on the bottom row
and moves first; Black starts on the top row.

Moves:
  - A pawn steps one square forward onto an empty square.
  - A pawn captures one square diagonally forward onto an enemy pawn.
  - Pawns never move sideways or backwards.

The position is scored after every move. You win when:
  - one of your pawns reaches the far row,
  - you capture all of your opponent's pawns, or
  - you can still move and your opponent cannot, whoever's turn it is.

If neither side can move, the game is a stalemate. With
stalemate_rule = \"MoverWins\" in the config file it is instead won by the
player who made the last move.

Controls:
  1 / 2         choose one- or two-player mode (or click a menu entry)
  arrows        move the cursor
  Enter, Space  select a pawn, then its destination (mouse clicks work too)
  q             quit
";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
            log_file,
        } => run_play(config, seed, delay_ms, &log_file),
        Command::Rules => {
            print!("{RULES}");
            Ok(())
        }
    }
}

/// Installs a file logger so tracing output does not interfere with the TUI.
fn init_logging(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Builds the session config from an optional file plus overrides.
#[instrument]
fn load_config(
    path: Option<PathBuf>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
) -> Result<SessionConfig> {
    let mut config = match path {
        Some(path) => SessionConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }

    Ok(config)
}

/// Runs the terminal game.
fn run_play(
    config: Option<PathBuf>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    log_file: &Path,
) -> Result<()> {
    init_logging(log_file)?;
    info!("Starting Tri-Pawn");

    let config = load_config(config, seed, delay_ms)?;
    info!(?config, "Session config ready");

    tui::run(config)
}
