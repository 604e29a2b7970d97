//! View model derived from a [`GameState`].
//!
//! Deriving a view is a pure function of the state: it may be repeated any
//! number of times without effect.

use derive_getters::Getters;
use serde::Serialize;
use tictactoe_core::{Board, GameState, GameStatus, WinningLine};

/// One jump target in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct HistoryEntry {
    /// Step this entry jumps to.
    step: usize,
    /// Button label.
    label: String,
    /// Whether this step is the one on display.
    is_current: bool,
}

impl HistoryEntry {
    /// Label for the jump target at `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

/// Everything the screen shows, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Status of the current step.
    status: GameStatus,
    /// Status line text.
    status_text: String,
    /// Snapshot at the cursor.
    board: Board,
    /// Line to highlight, if the game is won.
    winning_line: Option<WinningLine>,
    /// Whether the "Play again" action is offered.
    show_reset: bool,
    /// Step on display.
    step: usize,
    /// One entry per snapshot in history.
    history: Vec<HistoryEntry>,
}

impl GameView {
    /// Derives the view for `state`.
    pub fn derive(state: &GameState) -> Self {
        let status = state.status();
        let history = (0..state.len())
            .map(|step| HistoryEntry {
                step,
                label: HistoryEntry::label_for(step),
                is_current: step == state.step(),
            })
            .collect();

        Self {
            status,
            status_text: status.to_string(),
            board: *state.current(),
            winning_line: status.winning_line(),
            show_reset: status.is_concluded(),
            step: state.step(),
            history,
        }
    }
}
