//! Game controller: owns the game state and turns input into transitions.

use tictactoe_core::{GameState, Position};
use tracing::{debug, info, instrument};

use crate::view::GameView;

/// Input the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A cell was activated.
    Activate(Position),
    /// "Play again" was chosen.
    Reset,
    /// A history entry was chosen.
    JumpTo(usize),
}

type Subscriber = Box<dyn FnMut(&GameView)>;

/// Owns one [`GameState`] for the lifetime of a mounted game.
///
/// Each [`dispatch`](Self::dispatch) replaces the state with the value
/// returned by the transition. Subscribers are handed a freshly derived
/// [`GameView`] whenever the state actually changes.
pub struct GameController {
    state: GameState,
    subscribers: Vec<Subscriber>,
}

impl GameController {
    /// Creates a controller holding a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_state(GameState::new())
    }

    /// Creates a controller starting from `state`.
    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Derives the view of the current state.
    pub fn view(&self) -> GameView {
        GameView::derive(&self.state)
    }

    /// Registers an observer called with the new view after each change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameView) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies an action. Returns true if the state changed.
    ///
    /// Reset is only honoured once the game has concluded, matching the
    /// "Play again" action only being offered then.
    #[instrument(skip(self), fields(step = self.state.step()))]
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = match action {
            Action::Activate(pos) => self.state.apply_move(pos),
            Action::JumpTo(step) => self.state.jump_to(step),
            Action::Reset if self.state.is_concluded() => {
                info!("Starting a new game");
                self.state.reset()
            }
            Action::Reset => {
                debug!("Reset ignored while game is in progress");
                return false;
            }
        };

        if next == self.state {
            return false;
        }
        self.state = next;

        if !self.subscribers.is_empty() {
            let view = self.view();
            for subscriber in &mut self.subscribers {
                subscriber(&view);
            }
        }
        true
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
