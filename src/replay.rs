//! Headless replay of a move list.

use anyhow::{Context, Result};
use tictactoe_engine::{GameEngine, Position, Update};
use tracing::{debug, instrument, warn};

/// Plays `moves` on a fresh engine.
///
/// Moves after the game ends follow the normal activation rules, so the
/// first of them starts a new game. Occupied cells are skipped with a
/// warning.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay<S: AsRef<str>>(moves: &[S]) -> Result<GameEngine> {
    let mut engine = GameEngine::new();
    for (n, raw) in moves.iter().enumerate() {
        let raw = raw.as_ref();
        let position: Position = raw
            .parse()
            .with_context(|| format!("Move {} could not be parsed", n + 1))?;

        match engine.handle_cell_activated(position) {
            Update::Ignored => warn!(%position, "Cell already taken, move skipped"),
            Update::Reset => debug!("Game was over, started a new one"),
            Update::Placed(placement) => debug!(?placement, "Move placed"),
        }
    }
    Ok(engine)
}

/// Plain-text report: board, status and history.
///
/// Free cells show their index, the same numbering `replay` accepts.
pub fn render_text(engine: &GameEngine) -> String {
    let status = if engine.is_over() {
        engine.status().to_string()
    } else {
        format!("{} ({} to move)", engine.status(), engine.turn())
    };
    let history: Vec<String> = engine
        .history()
        .iter()
        .map(|pos| pos.index().to_string())
        .collect();

    format!("{}\n\nStatus: {}\nMoves: {}", engine.board(), status, history.join(" "))
}

/// Pretty JSON of the full engine state.
pub fn render_json(engine: &GameEngine) -> Result<String> {
    serde_json::to_string_pretty(engine).context("Failed to serialize game state")
}
