//! Win detection logic for tic-tac-toe.

use crate::line::WinningLine;
use crate::types::{Board, Player};
use tracing::instrument;

/// Finds the first complete line on the board.
///
/// Lines are checked in [`WinningLine::ALL`] order and marks are compared
/// by equality. Returns the owner and the line, or `None`.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    WinningLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions().map(|pos| board.get(pos));
        let player = a.player()?;
        (a == b && b == c).then_some((player, line))
    })
}
