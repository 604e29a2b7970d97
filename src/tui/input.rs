//! Keyboard handling: cursor movement, focus and key-to-action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;
use tracing::{debug, instrument};

use crate::controller::Action;
use crate::view::GameView;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board grid.
    #[default]
    Board,
    /// The move list.
    History,
}

/// Result of handling one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Forward an action to the controller.
    Dispatch(Action),
    /// Only local input state changed.
    Stay,
    /// Leave the game.
    Quit,
}

/// Cursor, focus and list selection. Nothing here affects the game itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }
}

impl InputState {
    /// Cell under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected entry in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Keeps the list selection inside the history after it shrinks.
    pub fn sync(&mut self, view: &GameView) {
        let last = view.history().len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }

    /// Maps a key press to an outcome.
    #[instrument(skip(self, view), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent, view: &GameView) -> KeyOutcome {
        let step = *view.step();
        let len = view.history().len();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyOutcome::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyOutcome::Quit,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match Position::from_index(index) {
                    Some(pos) => {
                        self.cursor = pos;
                        KeyOutcome::Dispatch(Action::Activate(pos))
                    }
                    None => KeyOutcome::Stay,
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') if *view.show_reset() => {
                KeyOutcome::Dispatch(Action::Reset)
            }
            KeyCode::Char('[') if step > 0 => KeyOutcome::Dispatch(Action::JumpTo(step - 1)),
            KeyCode::Char(']') if step + 1 < len => KeyOutcome::Dispatch(Action::JumpTo(step + 1)),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => {
                        self.selected = step;
                        Focus::History
                    }
                    Focus::History => Focus::Board,
                };
                debug!(focus = ?self.focus, "Focus changed");
                KeyOutcome::Stay
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code, len),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyOutcome::Dispatch(Action::Activate(self.cursor)),
            code => {
                self.cursor = move_cursor(self.cursor, code);
                KeyOutcome::Stay
            }
        }
    }

    fn handle_history_key(&mut self, code: KeyCode, len: usize) -> KeyOutcome {
        if len == 0 {
            return KeyOutcome::Stay;
        }
        match code {
            KeyCode::Up => {
                self.selected = match self.selected {
                    0 => len - 1,
                    i => i - 1,
                };
                KeyOutcome::Stay
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1) % len;
                KeyOutcome::Stay
            }
            KeyCode::Home => {
                self.selected = 0;
                KeyOutcome::Stay
            }
            KeyCode::End => {
                self.selected = len - 1;
                KeyOutcome::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => KeyOutcome::Dispatch(Action::JumpTo(self.selected)),
            _ => KeyOutcome::Stay,
        }
    }
}

/// Moves cursor based on arrow keys; edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, column)),
        KeyCode::Down => Some((row + 1, column)),
        KeyCode::Left => column.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, column + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_column(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::GameState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view_after(indices: &[usize]) -> GameView {
        let state = indices.iter().fold(GameState::new(), |s, &i| s.apply_index(i));
        GameView::derive(&state)
    }

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopCenter, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Left), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_number_keys_activate_cells() {
        let mut input = InputState::default();
        let view = view_after(&[]);
        assert_eq!(
            input.handle_key(key(KeyCode::Char('1')), &view),
            KeyOutcome::Dispatch(Action::Activate(Position::TopLeft))
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('9')), &view),
            KeyOutcome::Dispatch(Action::Activate(Position::BottomRight))
        );
        assert_eq!(input.cursor(), Position::BottomRight);
        assert_eq!(input.handle_key(key(KeyCode::Char('0')), &view), KeyOutcome::Stay);
    }

    #[test]
    fn test_enter_activates_cursor_cell() {
        let mut input = InputState::default();
        let view = view_after(&[]);
        input.handle_key(key(KeyCode::Left), &view);
        assert_eq!(
            input.handle_key(key(KeyCode::Enter), &view),
            KeyOutcome::Dispatch(Action::Activate(Position::MiddleLeft))
        );
    }

    #[test]
    fn test_reset_only_when_concluded() {
        let mut input = InputState::default();
        assert_eq!(input.handle_key(key(KeyCode::Char('r')), &view_after(&[4])), KeyOutcome::Stay);
        assert_eq!(
            input.handle_key(key(KeyCode::Char('r')), &view_after(&[0, 3, 1, 4, 2])),
            KeyOutcome::Dispatch(Action::Reset)
        );
    }

    #[test]
    fn test_bracket_keys_step_through_history() {
        let mut input = InputState::default();
        let view = view_after(&[0, 4]);
        assert_eq!(
            input.handle_key(key(KeyCode::Char('[')), &view),
            KeyOutcome::Dispatch(Action::JumpTo(1))
        );
        assert_eq!(input.handle_key(key(KeyCode::Char(']')), &view), KeyOutcome::Stay);
        assert_eq!(input.handle_key(key(KeyCode::Char('[')), &view_after(&[])), KeyOutcome::Stay);
    }

    #[test]
    fn test_history_focus_selects_and_jumps() {
        let mut input = InputState::default();
        let view = view_after(&[0, 4, 8]);

        input.handle_key(key(KeyCode::Tab), &view);
        assert_eq!(input.focus(), Focus::History);
        assert_eq!(input.selected(), 3);

        input.handle_key(key(KeyCode::Down), &view);
        assert_eq!(input.selected(), 0);
        input.handle_key(key(KeyCode::Down), &view);
        assert_eq!(
            input.handle_key(key(KeyCode::Enter), &view),
            KeyOutcome::Dispatch(Action::JumpTo(1))
        );

        input.handle_key(key(KeyCode::Tab), &view);
        assert_eq!(input.focus(), Focus::Board);
    }

    #[test]
    fn test_sync_clamps_selection() {
        let mut input = InputState::default();
        input.handle_key(key(KeyCode::Tab), &view_after(&[0, 4, 8]));
        input.sync(&view_after(&[0]));
        assert_eq!(input.selected(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut input = InputState::default();
        let view = view_after(&[]);
        assert_eq!(input.handle_key(key(KeyCode::Char('q')), &view), KeyOutcome::Quit);
        assert_eq!(input.handle_key(key(KeyCode::Esc), &view), KeyOutcome::Quit);
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &view),
            KeyOutcome::Quit
        );
    }
}
