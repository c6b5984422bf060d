//! Running tally of finished games.

use tictactoe_engine::{GameStatus, Player};

/// Wins and draws across the games of one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl Scoreboard {
    /// Counts a finished game. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress => {}
            GameStatus::Won {
                winner: Player::X, ..
            } => self.x_wins += 1,
            GameStatus::Won {
                winner: Player::O, ..
            } => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
        }
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Finished games.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {}  O {}  Draws {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
