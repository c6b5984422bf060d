//! Terminal UI for tic-tac-toe.
//!
//! The UI is the engine's only collaborator: it turns clicks and key
//! presses into cell activations and draws whatever the returned render
//! directives describe.

mod app;
mod input;
mod scoreboard;
mod ui;

pub use app::{App, CellView, Control};
pub use input::{Action, Direction, action_for, move_cursor};
pub use scoreboard::Scoreboard;
pub use ui::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout, cell_at, cell_rects, draw, screen_layout};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture for one game session.
///
/// Dropping the session restores the terminal if [`TerminalSession::restore`]
/// has not run, so early returns and panics leave the shell usable.
struct TerminalSession {
    restored: bool,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let session = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(session)
    }

    fn restore(&mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal(&mut io::stdout())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(err) = self.restore() {
                error!(error = %err, "Failed to restore terminal");
            }
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture.
///
/// Every step runs even when an earlier one fails; the first error is
/// returned.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Reports the game-loop error ahead of any teardown error.
fn finish(res: Result<()>, teardown: io::Result<()>) -> Result<()> {
    match (res, teardown) {
        (Err(err), Err(teardown_err)) => {
            error!(error = %teardown_err, "Failed to restore terminal");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), teardown) => teardown.context("Failed to restore terminal"),
    }
}

/// Runs the interactive game until the player quits.
///
/// Logging goes to the configured log file so it does not draw over the
/// board. The terminal is restored before any error is returned.
#[instrument(skip_all)]
pub fn run_tui(config: &Config) -> Result<()> {
    crate::logging::init_file(config.log_file(), config.log_filter())?;
    info!("Starting tic-tac-toe TUI");

    let mut session = TerminalSession::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| run_app(&mut terminal, App::new(*config.theme())));

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    finish(res, session.restore())
}

fn run_app(terminal: &mut CrosstermTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        // Blocks until the next event; nothing changes between events.
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = action_for(key) {
                    debug!(?action, "Key action");
                    if app.handle_action(action) == Control::Quit {
                        return Ok(());
                    }
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(&mut app, Rect::new(0, 0, size.width, size.height), mouse);
            }
            _ => {}
        }
    }
}

/// Activates the cell under a left click.
pub fn handle_mouse(app: &mut App, area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    match cell_at(area, mouse.column, mouse.row) {
        Some(position) => {
            debug!(%position, "Cell clicked");
            app.activate(position);
        }
        None => warn!(column = mouse.column, row = mouse.row, "Click outside the board"),
    }
}
