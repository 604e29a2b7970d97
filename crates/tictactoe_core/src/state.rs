//! Game state with move history and a step cursor.
//!
//! Every transition takes `&self` and returns the next state as a new value.
//! Snapshots already in history are never written to; playing from an
//! earlier step copies the prefix up to the cursor and discards the rest.

use crate::rules::{WinningLine, detect_winner};
use crate::{Board, GameStatus, Mark, MoveError, Position, Square, StateError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Number of moves that fill the board.
pub const MAX_MOVES: usize = 9;

/// History of board snapshots plus the step currently shown.
///
/// `history[0]` is always the empty board, and `step` always indexes an
/// existing entry. Whose turn it is follows from the step: X on even
/// steps, O on odd ones.
///
/// Deserialization checks the same invariants and fails with a
/// [`StateError`] instead of producing a state that panics later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<Board>,
    step: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    step: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let RawGameState { history, step } = raw;
        let first = history.first().ok_or(StateError::EmptyHistory)?;
        if *first != Board::new() {
            return Err(StateError::StartNotEmpty);
        }
        if step >= history.len() {
            return Err(StateError::StepOutOfRange {
                step,
                len: history.len(),
            });
        }

        for (k, pair) in history.windows(2).enumerate() {
            let (before, after) = (&pair[0], &pair[1]);
            let legal = detect_winner(before).is_none()
                && match before.diff(after).as_slice() {
                    [pos] => {
                        before.is_empty(*pos)
                            && after.get(*pos) == Square::Occupied(Mark::for_step(k))
                    }
                    _ => false,
                };
            if !legal {
                return Err(StateError::InvalidTransition(k + 1));
            }
        }

        Ok(Self { history, step })
    }
}

impl GameState {
    /// Creates the initial state: one empty board at step 0.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Returns the snapshot at the cursor.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns every snapshot, including ones after the cursor.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the cursor.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of snapshots in history (always at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; history starts with the empty board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Mark that the next move at the cursor places.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Winning line on the current snapshot, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        detect_winner(self.current())
    }

    /// Derives the status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winner() {
            GameStatus::Won(line)
        } else if self.step == MAX_MOVES {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_mark(),
            }
        }
    }

    /// Returns true once the current snapshot is won or drawn.
    pub fn is_concluded(&self) -> bool {
        self.status().is_concluded()
    }

    /// Position played at each step after the first, in order.
    ///
    /// Recovered by comparing neighbouring snapshots, which differ in
    /// exactly one square.
    pub fn moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.history
            .windows(2)
            .filter_map(|pair| pair[0].diff(&pair[1]).first().copied())
    }

    /// Plays a move at `pos`, reporting why it was refused.
    ///
    /// # Errors
    ///
    /// - [`MoveError::SquareOccupied`] if the square is taken at the cursor.
    /// - [`MoveError::GameOver`] if the current snapshot already has a line.
    #[instrument(skip(self), fields(step = self.step, mark = %self.next_mark()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        let current = self.current();
        if !current.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        if detect_winner(current).is_some() {
            return Err(MoveError::GameOver);
        }

        let next = current.with(pos, Square::Occupied(self.next_mark()));
        let mut history = self.history[..=self.step].to_vec();
        history.push(next);
        let step = history.len() - 1;

        debug!(
            discarded = self.history.len() - (self.step + 1),
            new_step = step,
            "Move applied"
        );
        Ok(Self { history, step })
    }

    /// Plays a move at `pos`; refused moves leave the state unchanged.
    pub fn apply_move(&self, pos: Position) -> Self {
        match self.try_apply_move(pos) {
            Ok(next) => next,
            Err(e) => {
                debug!(position = %pos, reason = %e, "Move ignored");
                self.clone()
            }
        }
    }

    /// Plays a move by raw cell index; indices outside 0-8 are ignored.
    pub fn apply_index(&self, index: usize) -> Self {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!(reason = %MoveError::OutOfBounds(index), "Move ignored");
                self.clone()
            }
        }
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// `step` must name an existing entry. Out-of-range steps are a caller
    /// bug; they are logged and the state is returned unchanged.
    #[instrument(skip(self), fields(from = self.step, len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Self {
        if step >= self.history.len() {
            warn!(step, "Jump target outside history");
            return self.clone();
        }
        Self {
            history: self.history.clone(),
            step,
        }
    }

    /// Returns the initial state.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn reset(&self) -> Self {
        Self::new()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> GameState {
        indices
            .iter()
            .fold(GameState::new(), |state, &i| state.apply_index(i))
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.len(), 1);
        assert_eq!(state.step(), 0);
        assert_eq!(state.current(), &Board::new());
        assert_eq!(state.next_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress { next: Mark::X });
    }

    #[test]
    fn test_apply_move_appends_snapshot() {
        let before = GameState::new();
        let after = before.apply_move(Position::Center);

        assert_eq!(after.len(), 2);
        assert_eq!(after.step(), 1);
        assert_eq!(after.next_mark(), Mark::O);
        assert_eq!(after.current().get(Position::Center), Square::Occupied(Mark::X));
        // Prior value is untouched.
        assert_eq!(before, GameState::new());
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let state = play(&[0]);
        assert_eq!(
            state.try_apply_move(Position::TopLeft),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(state.apply_move(Position::TopLeft), state);
    }

    #[test]
    fn test_move_after_win_is_noop() {
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.try_apply_move(Position::BottomRight), Err(MoveError::GameOver));
        assert_eq!(state.apply_move(Position::BottomRight), state);
    }

    #[test]
    fn test_out_of_bounds_index_is_noop() {
        let state = play(&[4]);
        assert_eq!(state.apply_index(9), state);
        assert_eq!(state.apply_index(usize::MAX), state);
    }

    #[test]
    fn test_winner_credit_follows_line() {
        let state = play(&[0, 3, 1, 4, 2]);
        let status = state.status();
        assert_eq!(status.winner(), Some(Mark::X));
        assert_eq!(
            status.winning_line().map(|l| l.cells()),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(status.to_string(), "X wins the game");
        // The derived turn has moved on, but credit goes to the line's mark.
        assert_eq!(state.next_mark(), Mark::O);
    }

    #[test]
    fn test_o_can_win() {
        let state = play(&[0, 3, 1, 4, 8, 5]);
        assert_eq!(state.status().winner(), Some(Mark::O));
        assert_eq!(state.status().to_string(), "O wins the game");
    }

    #[test]
    fn test_jump_keeps_history() {
        let state = play(&[0, 3, 1]);
        let jumped = state.jump_to(0);

        assert_eq!(jumped.len(), 4);
        assert_eq!(jumped.step(), 0);
        assert_eq!(jumped.current(), &Board::new());
        assert_eq!(jumped.next_mark(), Mark::X);

        let odd = state.jump_to(1);
        assert_eq!(odd.next_mark(), Mark::O);
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let state = play(&[0, 3, 1]).jump_to(0).apply_move(Position::Center);

        assert_eq!(state.len(), 2);
        assert_eq!(state.step(), 1);
        assert_eq!(state.current().get(Position::Center), Square::Occupied(Mark::X));
        assert!(state.current().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_jump_past_end_is_ignored() {
        let state = play(&[0, 3]);
        assert_eq!(state.jump_to(3), state);
    }

    #[test]
    fn test_jump_back_from_win_allows_play() {
        let won = play(&[0, 3, 1, 4, 2]);
        let rewound = won.jump_to(4);
        assert!(!rewound.is_concluded());

        let alt = rewound.apply_move(Position::BottomRight);
        assert_eq!(alt.len(), 6);
        assert!(!alt.is_concluded());
    }

    #[test]
    fn test_reset_returns_initial_state() {
        assert_eq!(play(&[0, 3, 1, 4, 2]).reset(), GameState::new());
    }

    #[test]
    fn test_draw_after_nine_moves() {
        // X O X / X O O / O X X
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.step(), MAX_MOVES);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.status().to_string(), "Draw");
        for pos in Position::ALL {
            assert_eq!(state.apply_move(pos), state);
        }
    }

    #[test]
    fn test_consecutive_snapshots_differ_by_one_square() {
        let state = play(&[4, 0, 8, 2, 1]);
        for pair in state.history().windows(2) {
            assert_eq!(pair[0].diff(&pair[1]).len(), 1);
        }
        let moves: Vec<_> = state.moves().map(Position::to_index).collect();
        assert_eq!(moves, vec![4, 0, 8, 2, 1]);
    }
}
