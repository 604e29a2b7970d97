//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. They hold
//! no state and may be called any number of times.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, detect_winner};
