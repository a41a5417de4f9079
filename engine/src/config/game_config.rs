use serde::{Deserialize, Serialize};

use crate::game::GameMode;
use crate::logger::LogLevel;

use super::Validate;

pub const MAX_DELIBERATION_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Pause before the bot's move is applied.
    pub deliberation_delay_ms: u64,
    pub alpha_beta: bool,
    pub log_level: LogLevel,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsBot,
            deliberation_delay_ms: 800,
            alpha_beta: false,
            log_level: LogLevel::Info,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.deliberation_delay_ms > MAX_DELIBERATION_DELAY_MS {
            return Err(format!(
                "Deliberation delay ({} ms) cannot exceed {} ms",
                self.deliberation_delay_ms, MAX_DELIBERATION_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_delay_limit() {
        let config = GameConfig {
            deliberation_delay_ms: MAX_DELIBERATION_DELAY_MS + 1,
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
