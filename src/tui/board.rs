//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe_core::{Board, Mark, Position, Square, WinningLine};

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the whole grid, separators included.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the whole grid, separators included.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Stateless view of one board snapshot.
///
/// Draws the nine cells and maps screen coordinates back to the cell
/// under them; it never decides what an activation means.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    cursor: Option<Position>,
    highlight: Option<WinningLine>,
    show_key_hints: bool,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board` with no cursor or highlight.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            highlight: None,
            show_key_hints: true,
        }
    }

    /// Highlights the cell under the keyboard cursor.
    pub fn cursor(mut self, cursor: Option<Position>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Highlights a completed line.
    pub fn highlight(mut self, line: Option<WinningLine>) -> Self {
        self.highlight = line;
        self
    }

    /// Shows the 1-9 key on empty cells.
    pub fn key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    /// Renders the grid centred in `area` and returns the grid's rectangle.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let grid = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

        for pos in Position::ALL {
            self.render_cell(frame, cell_rect(grid, pos), pos);
        }

        let separator = Style::default().fg(Color::DarkGray);
        let rule = vec!["─".repeat(CELL_WIDTH as usize); 3].join("┼");
        for i in 1..3u16 {
            let y = grid.y + i * (CELL_HEIGHT + 1) - 1;
            if y < grid.bottom() {
                let row = Rect::new(grid.x, y, grid.width, 1);
                frame.render_widget(Paragraph::new(rule.as_str()).style(separator), row);
            }

            let x = grid.x + i * (CELL_WIDTH + 1) - 1;
            for r in 0..3u16 {
                let y = grid.y + r * (CELL_HEIGHT + 1);
                let column = Rect::new(x, y, 1, CELL_HEIGHT).intersection(grid);
                let bar = vec![Line::from("│"); CELL_HEIGHT as usize];
                frame.render_widget(Paragraph::new(bar).style(separator), column);
            }
        }

        grid
    }

    fn render_cell(&self, frame: &mut Frame, area: Rect, pos: Position) {
        let (symbol, base_style) = match self.board.get(pos) {
            Square::Empty if self.show_key_hints => {
                ((pos.to_index() + 1).to_string(), Style::default().fg(Color::DarkGray))
            }
            Square::Empty => (String::new(), Style::default()),
            Square::Occupied(Mark::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Mark::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let style = if self.highlight.is_some_and(|line| line.contains(pos)) {
            base_style.bg(Color::Green).fg(Color::Black)
        } else if self.cursor == Some(pos) {
            base_style.bg(Color::White).fg(Color::Black)
        } else {
            base_style
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(symbol, style)),
            Line::from(""),
        ];
        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }

    /// Returns the cell under a screen coordinate inside `grid`.
    ///
    /// `grid` is the rectangle returned by [`BoardView::render`].
    /// Separator lines belong to no cell.
    pub fn cell_at(grid: Rect, column: u16, row: u16) -> Option<Position> {
        if column < grid.x || row < grid.y {
            return None;
        }
        let dx = column - grid.x;
        let dy = row - grid.y;
        if dx >= grid.width.min(BOARD_WIDTH) || dy >= grid.height.min(BOARD_HEIGHT) {
            return None;
        }
        if dx % (CELL_WIDTH + 1) == CELL_WIDTH || dy % (CELL_HEIGHT + 1) == CELL_HEIGHT {
            return None;
        }
        Position::from_row_column(
            (dy / (CELL_HEIGHT + 1)) as usize,
            (dx / (CELL_WIDTH + 1)) as usize,
        )
    }
}

/// Screen rectangle of one cell inside the grid.
pub fn cell_rect(grid: Rect, pos: Position) -> Rect {
    let x = grid.x + pos.column() as u16 * (CELL_WIDTH + 1);
    let y = grid.y + pos.row() as u16 * (CELL_HEIGHT + 1);
    Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
