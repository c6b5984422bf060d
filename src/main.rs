//! Tic-tac-toe - unified CLI
//!
//! Plays interactively in the terminal, or replays a move list headlessly.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Command, Config, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command() {
        Command::Play => tui::run_tui(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Replays moves and prints the result to stdout.
fn run_replay(config: &Config, moves: &[String], json: bool) -> Result<()> {
    tictactoe::init_stderr_logging(config.log_filter());
    info!(count = moves.len(), "Replaying moves");

    let engine = replay::replay(moves)?;
    let output = if json {
        replay::render_json(&engine)?
    } else {
        replay::render_text(&engine)
    };
    println!("{}", output);
    Ok(())
}
