//! Headless replay: apply a move list and report the result as text or JSON.

use serde::Serialize;
use tictactoe_core::{GameState, GameStatus, Position, Square};
use tracing::{info, instrument};

use crate::view::GameView;

/// Outcome of replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Final state, history included.
    pub state: GameState,
    /// Status at the final cursor.
    pub status: GameStatus,
    /// Status line text.
    pub status_text: String,
    /// Cell indices that were ignored as illegal.
    pub ignored: Vec<usize>,
}

/// Plays `moves` (cell indices) from a fresh game, then jumps to `jump` if given.
///
/// Illegal moves are skipped exactly like clicks on an occupied square.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> ReplayReport {
    let mut state = GameState::new();
    let mut ignored = Vec::new();

    for &index in moves {
        let next = state.apply_index(index);
        if next == state {
            ignored.push(index);
        }
        state = next;
    }
    if let Some(step) = jump {
        state = state.jump_to(step);
    }

    let status = state.status();
    info!(step = state.step(), ignored = ignored.len(), %status, "Replay finished");
    ReplayReport {
        status_text: status.to_string(),
        state,
        status,
        ignored,
    }
}

/// Parses one replay move: a cell index or a position label.
///
/// Numbers are passed through unchecked so out-of-range cells are reported
/// as ignored moves rather than rejected up front.
pub fn parse_move(s: &str) -> Result<usize, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("'{}' is neither a cell index nor a position label", s.trim()))
}

/// Formats the report the way the screen lays it out.
pub fn render_text(report: &ReplayReport) -> String {
    let view = GameView::derive(&report.state);
    let mut out = String::new();

    out.push_str(view.status_text());
    out.push_str("\n\n");
    out.push_str(&view.board().display());
    out.push_str("\n\n");

    for entry in view.history() {
        let marker = if *entry.is_current() { ">" } else { " " };
        let played = (*entry.step() > 0)
            .then(|| report.state.moves().nth(entry.step() - 1))
            .flatten()
            .map(|pos| describe_move(&report.state, *entry.step(), pos))
            .unwrap_or_default();
        out.push_str(&format!("{} {}{}\n", marker, entry.label(), played));
    }

    if !report.ignored.is_empty() {
        let list: Vec<String> = report.ignored.iter().map(usize::to_string).collect();
        out.push_str(&format!("\nIgnored moves: {}\n", list.join(", ")));
    }
    out
}

fn describe_move(state: &GameState, step: usize, pos: Position) -> String {
    match state.history()[step].get(pos) {
        Square::Occupied(mark) => format!(" ({} at {})", mark, pos),
        Square::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Mark;

    #[test]
    fn test_replay_reports_ignored_moves() {
        let report = replay(&[0, 0, 4, 12], None);
        assert_eq!(report.ignored, vec![0, 12]);
        assert_eq!(report.state.len(), 3);
        assert_eq!(report.status, GameStatus::InProgress { next: Mark::X });
    }

    #[test]
    fn test_replay_jump_keeps_history() {
        let report = replay(&[0, 3, 1, 4, 2], Some(2));
        assert_eq!(report.state.step(), 2);
        assert_eq!(report.state.len(), 6);
        assert_eq!(report.status_text, "Next player: X");
    }

    #[test]
    fn test_parse_move_accepts_labels_and_indices() {
        let moves: Vec<usize> = ["top-left", "4", " Bottom-right", "12"]
            .into_iter()
            .map(parse_move)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(moves, vec![0, 4, 8, 12]);
        assert!(parse_move("corner").is_err());

        let report = replay(&moves, None);
        assert_eq!(report.ignored, vec![12]);
        assert_eq!(report.state.len(), 4);
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&replay(&[0, 3, 1, 4, 2], None));
        assert!(text.starts_with("X wins the game\n\nX|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\n"));
        assert!(text.contains("  Go to game start\n"));
        assert!(text.contains("  Go to move #1 (X at Top-left)\n"));
        assert!(text.contains("> Go to move #5 (X at Top-right)\n"));
    }
}
