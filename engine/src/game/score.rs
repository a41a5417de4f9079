use serde::{Deserialize, Serialize};

use super::types::{GameOutcome, Player};

/// Running results across games. Survives `new_game`, cleared only by `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Returns `false` for [`GameOutcome::InProgress`], which is not counted.
    pub fn record(&mut self, outcome: GameOutcome) -> bool {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => return false,
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
