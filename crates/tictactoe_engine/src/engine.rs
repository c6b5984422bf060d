//! The game state machine.
//!
//! `InProgress --move--> InProgress | Won | Draw`. `Won` and `Draw` are
//! terminal: the next activation resets the game instead of placing a
//! mark.

use crate::position::Position;
use crate::render::{Highlight, RenderDirective};
use crate::rules;
use crate::types::{Board, GameStatus, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, whose turn it is and the game status. All mutation
/// goes through [`GameEngine::reset`] and
/// [`GameEngine::handle_cell_activated`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    status: GameStatus,
    history: Vec<Position>,
}

/// A mark placed by [`GameEngine::handle_cell_activated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Who played.
    pub player: Player,
    /// Where they played.
    pub position: Position,
    /// Status after evaluating the move.
    pub status: GameStatus,
}

/// What an engine call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Update {
    /// A new game started; the board is empty and X is to move.
    Reset,
    /// The cell was occupied. Nothing changed.
    Ignored,
    /// A mark was placed.
    Placed(Placement),
}

impl Update {
    /// Visual changes the UI must apply for this update, in order.
    pub fn directives(&self) -> Vec<RenderDirective> {
        match self {
            Update::Reset => vec![RenderDirective::ClearAll],
            Update::Ignored => Vec::new(),
            Update::Placed(placement) => {
                let mut directives = vec![RenderDirective::DrawMark {
                    position: placement.position,
                    text: placement.player.symbol(),
                    foreground: placement.player,
                }];
                let style = match placement.status {
                    GameStatus::InProgress => None,
                    GameStatus::Won { .. } => Some(Highlight::Win),
                    GameStatus::Draw => Some(Highlight::Draw),
                };
                if let Some(style) = style {
                    directives.push(RenderDirective::Highlight {
                        positions: placement.status.highlighted_positions(),
                        style,
                    });
                }
                directives
            }
        }
    }

    /// The placement, if a mark was placed.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            Update::Placed(placement) => Some(placement),
            _ => None,
        }
    }
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts a new game: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Update {
        *self = Self::new();
        info!("New game started");
        Update::Reset
    }

    /// Handles a click (or key press) on a cell.
    ///
    /// - After the game has ended, any activation starts a new game.
    /// - An occupied cell is ignored.
    /// - Otherwise the current player's mark is placed, the turn flips and
    ///   the board is evaluated.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn handle_cell_activated(&mut self, position: Position) -> Update {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "Game over, activation starts a new game");
            return self.reset();
        }

        if !self.board.is_empty(position) {
            debug!("Cell occupied, ignoring activation");
            return Update::Ignored;
        }

        let player = self.turn;
        self.board.set(position, player.into());
        self.history.push(position);
        self.turn = player.opponent();
        self.status = rules::evaluate(&self.board);

        match self.status {
            GameStatus::InProgress => debug!(%player, "Move applied"),
            GameStatus::Won { winner, line } => info!(%winner, %line, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }

        Update::Placed(Placement {
            player,
            position,
            status: self.status,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the positions played this game, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, WinningLine};

    fn play(engine: &mut GameEngine, indices: &[usize]) -> Update {
        let mut last = Update::Ignored;
        for &idx in indices {
            let pos = Position::from_index(idx).expect("index in range");
            last = engine.handle_cell_activated(pos);
        }
        last
    }

    #[test]
    fn test_new_engine_state() {
        let engine = GameEngine::new();
        assert_eq!(engine.turn(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.board().count(Mark::Empty), 9);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_first_move_places_x_and_flips_turn() {
        let mut engine = GameEngine::new();
        let update = engine.handle_cell_activated(Position::Center);

        assert_eq!(
            update,
            Update::Placed(Placement {
                player: Player::X,
                position: Position::Center,
                status: GameStatus::InProgress,
            })
        );
        assert_eq!(engine.board().get(Position::Center), Mark::X);
        assert_eq!(engine.turn(), Player::O);
        assert_eq!(engine.history(), &[Position::Center]);
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut engine = GameEngine::new();
        engine.handle_cell_activated(Position::Center);
        let before = engine.clone();

        let update = engine.handle_cell_activated(Position::Center);

        assert_eq!(update, Update::Ignored);
        assert!(update.directives().is_empty());
        assert_eq!(engine, before);
    }

    #[test]
    fn test_turn_flips_on_winning_move() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(engine.turn(), Player::O);
    }

    #[test]
    fn test_win_directives_highlight_line() {
        let mut engine = GameEngine::new();
        let update = play(&mut engine, &[0, 3, 1, 4, 2]);

        assert_eq!(
            update.directives(),
            vec![
                RenderDirective::DrawMark {
                    position: Position::TopRight,
                    text: "X",
                    foreground: Player::X,
                },
                RenderDirective::Highlight {
                    positions: WinningLine::TopRow.positions().to_vec(),
                    style: Highlight::Win,
                },
            ]
        );
    }

    #[test]
    fn test_activation_after_game_over_resets() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        assert!(engine.is_over());

        let update = engine.handle_cell_activated(Position::BottomRight);

        assert_eq!(update, Update::Reset);
        assert_eq!(update.directives(), vec![RenderDirective::ClearAll]);
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[4, 0, 8]);

        engine.reset();
        let once = engine.clone();
        engine.reset();

        assert_eq!(engine, once);
        assert_eq!(engine, GameEngine::default());
    }

    #[test]
    fn test_o_foreground_for_o_moves() {
        let mut engine = GameEngine::new();
        engine.handle_cell_activated(Position::TopLeft);
        let update = engine.handle_cell_activated(Position::Center);

        assert_eq!(
            update.directives(),
            vec![RenderDirective::DrawMark {
                position: Position::Center,
                text: "O",
                foreground: Player::O,
            }]
        );
    }
}
