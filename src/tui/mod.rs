//! Terminal front-end: mounts a [`GameController`] on a terminal.

mod board;
mod input;
mod ui;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, BoardView, cell_rect};
pub use input::{Focus, InputState, KeyOutcome, move_cursor};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

use crate::config::GameConfig;
use crate::controller::{Action, GameController};

/// Where the event loop reads terminal input from.
pub trait EventSource {
    /// Waits up to `timeout` for the next event; `None` means none arrived.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Takes over the terminal, plays until the user quits, then restores it.
#[instrument(skip_all)]
pub async fn run(config: &GameConfig) -> Result<()> {
    info!("Starting terminal game");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = GameController::new();
    let res = mount(&mut terminal, &mut controller, &mut CrosstermEvents, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Attaches `controller` to `terminal` and runs the event loop on `events`.
///
/// Each event is handled to completion before the next is read, and the
/// screen is re-derived from the controller's state on every pass.
#[instrument(skip_all)]
pub async fn mount<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    controller: &mut GameController,
    events: &mut E,
    config: &GameConfig,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut input = InputState::default();
    let mut grid = Rect::default();

    loop {
        let view = controller.view();
        input.sync(&view);
        terminal.draw(|f| grid = draw(f, &view, &input, *config.show_key_hints()))?;

        if let Some(event) = events.next_event(Duration::from_millis(100))? {
            let action = match event {
                // Skip key release events (crossterm fires both press and release).
                Event::Key(key) if key.kind == KeyEventKind::Release => None,
                Event::Key(key) => match input.handle_key(key, &view) {
                    KeyOutcome::Dispatch(action) => Some(action),
                    KeyOutcome::Stay => None,
                    KeyOutcome::Quit => {
                        info!(step = controller.state().step(), "User quit");
                        return Ok(());
                    }
                },
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    BoardView::cell_at(grid, mouse.column, mouse.row).map(Action::Activate)
                }
                _ => None,
            };

            if let Some(action) = action {
                let changed = controller.dispatch(action);
                debug!(?action, changed, "Action handled");
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
