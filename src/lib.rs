//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Engine** (`tictactoe_engine`): board, rules and the game state
//!   machine. Returns render directives instead of drawing.
//! - **TUI**: ratatui front end that applies those directives, maps mouse
//!   clicks and keys to cell activations and keeps a session scoreboard.
//! - **Replay**: headless runner for scripted move lists.
//! - **Config**: TOML settings for colors and logging.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
pub mod replay;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE, Theme};

// Crate-level exports - Logging
pub use logging::{init_file as init_file_logging, init_stderr as init_stderr_logging};

// Crate-level exports - Game types
pub use tictactoe_engine::{
    Board, GameEngine, GameStatus, Highlight, Mark, Placement, Player, Position, RenderDirective,
    Update, WinningLine,
};
