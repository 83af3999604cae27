//! Command-line interface for tripawn.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tri-Pawn Challenge - hexapawn in the terminal
#[derive(Parser, Debug)]
#[command(name = "tripawn")]
#[command(about = "Three pawns a side on a 3x3 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML session config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the computer player (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Computer move delay in milliseconds (overrides the config file)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// File to write logs to
        #[arg(long, default_value = "tripawn.log")]
        log_file: PathBuf,
    },

    /// Print the rules and exit
    Rules,
}
