//! Render directives handed to the UI.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Background treatment for cells at the end of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// The three cells of the winning line.
    Win,
    /// Every cell, after a drawn game.
    Draw,
}

/// One visual change the UI must apply.
///
/// The engine describes intent only; colors and fonts belong to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderDirective {
    /// Blank all nine cells and restore default styling.
    ClearAll,
    /// Show a mark in a cell.
    DrawMark {
        /// Cell receiving the mark.
        position: Position,
        /// Text to show, `"X"` or `"O"`.
        text: &'static str,
        /// Whose foreground color to use. Fixed per player.
        foreground: Player,
    },
    /// Highlight cells once the game is over.
    Highlight {
        /// Cells to highlight.
        positions: Vec<Position>,
        /// Win or draw styling.
        style: Highlight,
    },
}
