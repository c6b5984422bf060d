//! The eight three-in-a-row lines.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A line that wins when one player holds all three of its cells.
///
/// Variant order is the evaluation order: rows, then columns, then
/// diagonals. When a board holds more than one complete line, the earliest
/// one here is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WinningLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// All lines in evaluation order.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::TopRow,
        WinningLine::MiddleRow,
        WinningLine::BottomRow,
        WinningLine::LeftColumn,
        WinningLine::CenterColumn,
        WinningLine::RightColumn,
        WinningLine::MainDiagonal,
        WinningLine::AntiDiagonal,
    ];

    /// The three cells on this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;

        match self {
            WinningLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinningLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinningLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinningLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinningLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinningLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            WinningLine::TopRow => "top row",
            WinningLine::MiddleRow => "middle row",
            WinningLine::BottomRow => "bottom row",
            WinningLine::LeftColumn => "left column",
            WinningLine::CenterColumn => "center column",
            WinningLine::RightColumn => "right column",
            WinningLine::MainDiagonal => "main diagonal",
            WinningLine::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(line: WinningLine) -> [usize; 3] {
        line.positions().map(Position::index)
    }

    #[test]
    fn test_lines_match_fixed_triples() {
        let expected = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for (line, triple) in WinningLine::ALL.into_iter().zip(expected) {
            assert_eq!(indices(line), triple, "{line}");
        }
    }

    #[test]
    fn test_all_is_sorted_in_evaluation_order() {
        assert!(WinningLine::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
