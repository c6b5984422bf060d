//! Pure tic-tac-toe game logic.
//!
//! The [`GameEngine`] owns the board, the turn indicator and the game
//! status. A UI layer feeds it cell activations and applies the
//! [`RenderDirective`]s it gets back; the engine never touches a terminal
//! or a window.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player, Position, WinningLine};
//!
//! let mut engine = GameEngine::new();
//! for pos in [0, 3, 1, 4, 2] {
//!     let pos = Position::from_index(pos).unwrap();
//!     engine.handle_cell_activated(pos);
//! }
//! assert_eq!(
//!     engine.status(),
//!     GameStatus::Won { winner: Player::X, line: WinningLine::TopRow }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod line;
mod position;
mod render;
pub mod rules;
mod types;

pub use engine::{GameEngine, Placement, Update};
pub use line::WinningLine;
pub use position::{Position, PositionParseError};
pub use render::{Highlight, RenderDirective};
pub use types::{Board, GameStatus, Mark, Player};
