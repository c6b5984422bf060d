//! Cell addresses on the board.

use crate::types::Board;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Indices run 0-8 in row-major order, so an out-of-range cell cannot be
/// expressed. Callers holding a raw index or grid coordinate go through
/// [`Position::from_index`] or [`Position::from_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a zero-based column and row.
    #[instrument]
    pub fn from_grid(column: usize, row: usize) -> Option<Self> {
        if column < 3 && row < 3 {
            Self::from_index(column + row * 3)
        } else {
            None
        }
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Empty cells on `board`, in index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Text that names no cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid position '{}': expected 0-8 or a label like 'center'", input)]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
}

impl std::str::FromStr for Position {
    type Err = PositionParseError;

    /// Accepts an index (0-8) or an exact label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.parse::<usize>() {
            Ok(index) => Self::from_index(index),
            Err(_) => Self::ALL
                .into_iter()
                .find(|pos| pos.label().eq_ignore_ascii_case(trimmed)),
        };
        parsed.ok_or_else(|| PositionParseError {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrips_through_grid() {
        for pos in Position::ALL {
            assert_eq!(Position::from_grid(pos.column(), pos.row()), Some(pos));
        }
    }

    #[test]
    fn test_from_grid_uses_column_plus_row_times_three() {
        assert_eq!(Position::from_grid(2, 0), Some(Position::TopRight));
        assert_eq!(Position::from_grid(0, 2), Some(Position::BottomLeft));
        assert_eq!(Position::from_grid(3, 0), None);
        assert_eq!(Position::from_grid(0, 3), None);
    }

    #[test]
    fn test_parse_index_and_label() {
        assert_eq!("4".parse::<Position>(), Ok(Position::Center));
        assert_eq!("top-left".parse::<Position>(), Ok(Position::TopLeft));
        assert_eq!(" BOTTOM-RIGHT ".parse::<Position>(), Ok(Position::BottomRight));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "9".parse::<Position>().unwrap_err();
        assert_eq!(err.input, "9");
        assert!("middle".parse::<Position>().is_err());
        assert!(err.to_string().contains("expected 0-8"));
    }
}
