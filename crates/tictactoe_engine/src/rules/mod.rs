//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates
//! state; the engine stores whatever [`evaluate`] returns.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::find_winning_line;

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the whole board.
///
/// A complete line wins, checked in [`WinningLine::ALL`](crate::WinningLine::ALL)
/// order. Otherwise a full board is a draw, and anything else is still in
/// progress.
#[instrument(skip(board), ret)]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = find_winning_line(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
