use std::time::Duration;

use crate::config::GameConfig;

use super::bot_controller::SearchSettings;
use super::game_session::GameSession;
use super::types::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub mode: GameMode,
    pub deliberation_delay: Duration,
    pub search: SearchSettings,
}

impl SessionSettings {
    pub fn create_session(&self) -> GameSession {
        GameSession::new(self.mode, self.search)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for SessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            mode: config.mode,
            deliberation_delay: Duration::from_millis(config.deliberation_delay_ms),
            search: SearchSettings {
                alpha_beta: config.alpha_beta,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_follow_config() {
        let config = GameConfig {
            mode: GameMode::PlayerVsPlayer,
            deliberation_delay_ms: 250,
            alpha_beta: true,
            ..GameConfig::default()
        };

        let settings = SessionSettings::from(&config);

        assert_eq!(settings.mode, GameMode::PlayerVsPlayer);
        assert_eq!(settings.deliberation_delay, Duration::from_millis(250));
        assert!(settings.search.alpha_beta);
        assert_eq!(settings.create_session().mode(), GameMode::PlayerVsPlayer);
    }
}
