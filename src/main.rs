//! Strictly Tic-Tac-Toe - terminal front end and scripted replay.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{GameConfig, parse_moves, replay, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.player_one, cli.player_two);

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run_tui(config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Run a scripted game and print the transcript
#[instrument(skip(config))]
fn run_replay(config: &GameConfig, moves: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let moves = parse_moves(moves)?;
    info!(count = moves.len(), "Replaying moves");

    let transcript = replay(config.player_one(), config.player_two(), &moves);
    if json {
        println!("{}", transcript.to_json()?);
    } else {
        print!("{}", transcript.to_text());
    }
    Ok(())
}
