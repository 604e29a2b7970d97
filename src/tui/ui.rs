//! Stateless rendering of the whole game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_core::GameStatus;

use super::board::BoardView;
use super::input::{Focus, InputState};
use crate::view::GameView;

/// Renders the status line, board, reset action and move list.
///
/// Returns the board grid's rectangle so mouse clicks can be mapped back
/// to cells.
pub fn draw(frame: &mut Frame, view: &GameView, input: &InputState, show_key_hints: bool) -> Rect {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(15),   // Game
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(28)])
        .split(chunks[1]);

    let game = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Reset
        ])
        .split(columns[0]);

    draw_status(frame, game[0], view);

    let cursor = (input.focus() == Focus::Board).then_some(input.cursor());
    let grid = BoardView::new(view.board())
        .cursor(cursor)
        .highlight(*view.winning_line())
        .key_hints(show_key_hints)
        .render(frame, game[1]);

    if *view.show_reset() {
        let reset = Paragraph::new("[r] Play again")
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(reset, game[2]);
    }

    draw_history(frame, columns[1], view, input);

    let help_text = match input.focus() {
        Focus::Board => "1-9/Enter: Play | ←↑↓→: Move | [ ]: Undo/Redo | Tab: Moves | q: Quit",
        Focus::History => "↑↓: Select | Enter: Jump | [ ]: Undo/Redo | Tab: Board | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    grid
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView) {
    let color = match view.status() {
        GameStatus::InProgress { .. } => Color::Yellow,
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
    };
    let status = Paragraph::new(view.status_text().as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_history(frame: &mut Frame, area: Rect, view: &GameView, input: &InputState) {
    let items: Vec<ListItem> = view
        .history()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(entry.label().as_str(), style))
        })
        .collect();

    let border = if input.focus() == Focus::History {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(border).title("Moves"))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if input.focus() == Focus::History {
        list_state.select(Some(input.selected()));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}
