//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - [`Board`]: one immutable snapshot of the 3x3 grid
//! - [`detect_winner`]: finds the first completed line on a snapshot
//! - [`GameState`]: history of snapshots plus a step cursor
//! - [`GameStatus`]: derived per step, never stored
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Mark, Position};
//!
//! let state = GameState::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::Center);
//! assert_eq!(state.next_mark(), Mark::X);
//!
//! // Step back and branch: the abandoned future is dropped.
//! let branched = state.jump_to(1).apply_move(Position::BottomRight);
//! assert_eq!(branched.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod state;
mod status;
mod types;

pub use error::{MoveError, StateError};
pub use position::Position;
pub use rules::{LINES, WinningLine, detect_winner};
pub use state::{GameState, MAX_MOVES};
pub use status::GameStatus;
pub use types::{Board, Mark, Square};
