//! Terminal tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Core**: game rules and history live in [`tictactoe_core`]
//! - **Controller**: [`GameController`] owns the state and applies [`Action`]s
//! - **View**: [`GameView`] is derived from the state on every render
//! - **TUI**: [`tui::mount`] attaches a controller to a terminal
//!
//! # Example
//!
//! ```
//! use tictactoe_tui::{Action, GameController};
//! use tictactoe_core::Position;
//!
//! let mut controller = GameController::new();
//! controller.dispatch(Action::Activate(Position::Center));
//! assert_eq!(controller.view().status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
pub mod replay;
pub mod tui;
mod view;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use controller::{Action, GameController};
pub use view::{GameView, HistoryEntry};
