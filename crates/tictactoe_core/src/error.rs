//! Reasons a move is refused.

use crate::Position;

/// Why [`GameState::try_apply_move`](crate::GameState::try_apply_move) refused a move.
///
/// The public game contract treats every refusal as a no-op; this type
/// exists so callers and logs can tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// A line is already complete on the current board.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// Why a serialized [`GameState`](crate::GameState) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateError {
    /// The history has no snapshots.
    #[display("History is empty")]
    EmptyHistory,

    /// The first snapshot is not the empty board.
    #[display("History does not start from an empty board")]
    StartNotEmpty,

    /// The step does not index a snapshot.
    #[display("Step {} is out of range for a history of {} snapshots", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots.
        len: usize,
    },

    /// The snapshot at this step is not one legal move after the previous one.
    #[display("Snapshot {} is not one legal move after the previous snapshot", _0)]
    InvalidTransition(#[error(not(source))] usize),
}
