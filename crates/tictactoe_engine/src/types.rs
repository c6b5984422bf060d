//! Core domain types for tic-tac-toe.

use crate::line::WinningLine;
use crate::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game. Doubles as the turn indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Text drawn in a cell this player has marked.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Mark {
    /// True when nobody has played in the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// The player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// 3x3 board, cells in row-major order (`index = column + row * 3`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.index()]
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.index()] = mark;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// All cells, indexed 0-8.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }
}

/// Builds a board from raw cells. Used for evaluating arbitrary positions.
impl From<[Mark; 9]> for Board {
    fn from(cells: [Mark; 9]) -> Self {
        Self { cells }
    }
}

/// Renders the board as a grid, numbering free cells by index 0-8.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx].player() {
                    Some(player) => write!(f, " {} ", player.symbol())?,
                    None => write!(f, " {} ", idx)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win along `line`.
    Won {
        /// Owner of the winning line.
        winner: Player,
        /// First complete line in evaluation order.
        line: WinningLine,
    },
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Cells to highlight: the winning line, or every cell on a draw.
    pub fn highlighted_positions(self) -> Vec<Position> {
        match self {
            GameStatus::InProgress => Vec::new(),
            GameStatus::Won { line, .. } => line.positions().to_vec(),
            GameStatus::Draw => Position::ALL.to_vec(),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, line } => write!(f, "{} wins ({})", winner, line),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
