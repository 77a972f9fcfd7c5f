//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name for the first player (X)
    #[arg(long, global = true)]
    pub player_one: Option<String>,

    /// Name for the second player (O)
    #[arg(long, global = true)]
    pub player_two: Option<String>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Play a scripted list of moves and print the result
    Replay {
        /// Cell indices 0-8, comma separated (e.g. "0,3,1,4,2")
        #[arg(short, long)]
        moves: String,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },
}
