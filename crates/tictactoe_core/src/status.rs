//! Derived game status.

use crate::rules::WinningLine;
use crate::Mark;
use serde::{Deserialize, Serialize};

/// Status of the game at the current step.
///
/// Never stored: [`GameState::status`](crate::GameState::status) recomputes it
/// from the current snapshot every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and `next` moves.
    InProgress {
        /// Mark to place on the next move.
        next: Mark,
    },
    /// A line has been completed.
    Won(WinningLine),
    /// Nine moves played with no line.
    Draw,
}

impl GameStatus {
    /// Returns the winning mark, taken from the completed line.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(line) => Some(line.mark()),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won(line) => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_concluded(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(line) => write!(f, "{} wins the game", line.mark()),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
