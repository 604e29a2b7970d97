//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in detection order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the mark that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    cells: [Position; 3],
    mark: Mark,
}

impl WinningLine {
    /// The three positions of the line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// The mark occupying every cell of the line.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Returns the first completed line on the board, if any.
///
/// Lines are checked rows top to bottom, then columns left to right, then
/// the `TopLeft`-`BottomRight` diagonal, then the `TopRight`-`BottomLeft` one.
/// Empty squares never form a line.
#[instrument(level = "trace")]
pub fn detect_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => Some(WinningLine {
                cells: [a, b, c],
                mark,
            }),
            _ => None,
        }
    })
}
