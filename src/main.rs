//! Tic-tac-toe - terminal game with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_tui::{GameConfig, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play { no_key_hints: false }) {
        Command::Play { no_key_hints } => {
            let config = if no_key_hints {
                config.with_key_hints(false)
            } else {
                config
            };
            run_play(config).await
        }
        Command::Replay { moves, jump, json } => run_replay(&config, &moves, jump, json),
    }
}

fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal game, logging to a file so output does not corrupt the screen
async fn run_play(config: GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Starting tic-tac-toe");
    tui::run(&config).await
}

/// Replay moves headlessly and print the outcome
fn run_replay(config: &GameConfig, moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let report = replay::replay(moves, jump);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", replay::render_text(&report));
    }
    Ok(())
}
