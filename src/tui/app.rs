//! Application state and logic.

use super::input::{self, Action};
use super::scoreboard::Scoreboard;
use crate::config::Theme;
use tictactoe_engine::{
    GameEngine, GameStatus, Highlight, Player, Position, RenderDirective, Update,
};
use tracing::{debug, info};

/// What the UI currently shows in one cell.
///
/// Only changed by applying [`RenderDirective`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellView {
    /// Mark text and whose color to draw it in.
    pub mark: Option<(&'static str, Player)>,
    /// End-of-game background.
    pub highlight: Option<Highlight>,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cells: [CellView; 9],
    cursor: Position,
    status_message: String,
    scoreboard: Scoreboard,
    theme: Theme,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(theme: Theme) -> Self {
        let engine = GameEngine::new();
        let status_message = status_line(&engine);
        Self {
            engine,
            cells: [CellView::default(); 9],
            cursor: Position::Center,
            status_message,
            scoreboard: Scoreboard::default(),
            theme,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// What each cell currently shows, indexed 0-8.
    pub fn cells(&self) -> &[CellView; 9] {
        &self.cells
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the session scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Gets the color theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Handles a mapped key press.
    pub fn handle_action(&mut self, action: Action) -> Control {
        match action {
            Action::Quit => {
                info!("User quit");
                return Control::Quit;
            }
            Action::NewGame => self.new_game(),
            Action::Activate(position) => {
                self.cursor = position;
                self.activate(position);
            }
            Action::ActivateCursor => self.activate(self.cursor),
            Action::Move(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
        }
        Control::Continue
    }

    /// Activates a cell, as a click on it would.
    pub fn activate(&mut self, position: Position) {
        let update = self.engine.handle_cell_activated(position);
        self.apply(update);
    }

    /// Restarts the game.
    pub fn new_game(&mut self) {
        debug!("Restarting game");
        let update = self.engine.reset();
        self.apply(update);
    }

    fn apply(&mut self, update: Update) {
        for directive in update.directives() {
            self.apply_directive(directive);
        }

        if let Some(placement) = update.placement() {
            self.scoreboard.record(placement.status);
        }

        self.status_message = match update {
            Update::Ignored => format!(
                "That cell is taken. Player {}'s turn.",
                self.engine.turn()
            ),
            _ => status_line(&self.engine),
        };
    }

    fn apply_directive(&mut self, directive: RenderDirective) {
        match directive {
            RenderDirective::ClearAll => self.cells = [CellView::default(); 9],
            RenderDirective::DrawMark {
                position,
                text,
                foreground,
            } => self.cells[position.index()].mark = Some((text, foreground)),
            RenderDirective::Highlight { positions, style } => {
                for position in positions {
                    self.cells[position.index()].highlight = Some(style);
                }
            }
        }
    }
}

fn status_line(engine: &GameEngine) -> String {
    match engine.status() {
        GameStatus::InProgress => format!("Player {}'s turn", engine.turn()),
        GameStatus::Won { winner, line } => format!(
            "Player {} wins on the {}! Click any cell or press N for a new game.",
            winner, line
        ),
        GameStatus::Draw => {
            "It's a draw! Click any cell or press N for a new game.".to_string()
        }
    }
}
