//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_tui::replay;

/// Tic-tac-toe with move history you can step back through
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Hide the 1-9 key numbers on empty squares
        #[arg(long)]
        no_key_hints: bool,
    },

    /// Apply a list of moves without a terminal and print the result
    Replay {
        /// Cells as indices 0-8 in row-major order or labels such as
        /// `center`, comma-separated
        #[arg(value_delimiter = ',', required = true, value_parser = replay::parse_move)]
        moves: Vec<usize>,

        /// Step to jump to after playing the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Print the game state as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_moves_accept_labels() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "center,0,top-right", "--jump", "1"]).unwrap();
        match cli.command {
            Some(Command::Replay { moves, jump, json }) => {
                assert_eq!(moves, vec![4, 0, 2]);
                assert_eq!(jump, Some(1));
                assert!(!json);
            }
            other => panic!("expected replay, got {:?}", other),
        }
    }

    #[test]
    fn test_replay_rejects_unknown_label() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "corner"]).is_err());
    }
}
