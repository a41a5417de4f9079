use std::fmt;

use serde::{Deserialize, Serialize};

pub type CellIndex = usize;

/// X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    pub fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Title shown by a front-end when the game ends.
    pub fn headline(self, mode: GameMode) -> String {
        match (self, mode) {
            (GameOutcome::InProgress, _) => "Make your move!".to_string(),
            (GameOutcome::Draw, _) => "It's a Draw!".to_string(),
            (GameOutcome::Win(player), GameMode::VsBot) if player == BOT_PLAYER => {
                "Bot Won!".to_string()
            }
            (GameOutcome::Win(_), GameMode::VsBot) => "Congrats! You Won!".to_string(),
            (GameOutcome::Win(player), GameMode::PlayerVsPlayer) => {
                format!("Congrats! Player {} Won!", player)
            }
        }
    }
}

/// The side played by the search engine in [`GameMode::VsBot`].
pub const BOT_PLAYER: Player = Player::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    #[default]
    #[serde(rename = "vs_bot")]
    VsBot,
}

impl GameMode {
    pub fn bot_player(self) -> Option<Player> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::VsBot => Some(BOT_PLAYER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_round_trips_through_player() {
        assert_eq!(Mark::from(Player::X).player(), Some(Player::X));
        assert_eq!(Mark::from(Player::O).player(), Some(Player::O));
        assert_eq!(Mark::Empty.player(), None);
    }

    #[test]
    fn test_headline_depends_on_mode() {
        assert_eq!(GameOutcome::Win(Player::X).headline(GameMode::VsBot), "Congrats! You Won!");
        assert_eq!(GameOutcome::Win(Player::O).headline(GameMode::VsBot), "Bot Won!");
        assert_eq!(
            GameOutcome::Win(Player::O).headline(GameMode::PlayerVsPlayer),
            "Congrats! Player O Won!"
        );
        assert_eq!(GameOutcome::Draw.headline(GameMode::VsBot), "It's a Draw!");
    }

    #[test]
    fn test_mode_uses_short_yaml_names() {
        let mode: GameMode = serde_yaml_ng::from_str("pvp").unwrap();

        assert_eq!(mode, GameMode::PlayerVsPlayer);
        assert_eq!(GameMode::VsBot.bot_player(), Some(Player::O));
    }
}
