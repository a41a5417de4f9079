use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. A missing config yields `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer> {
    config_content_provider: TConfigContentProvider,
    config_serializer: TConfigSerializer,
    config: RwLock<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer> {
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self {
            config_content_provider: FileContentConfigProvider::new(file_path),
            config_serializer: YamlConfigSerializer,
            config: RwLock::new(None),
        }
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(config_content_provider: TConfigContentProvider, config_serializer: TConfigSerializer) -> Self {
        Self {
            config_content_provider,
            config_serializer,
            config: RwLock::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        if let Some(config) = self.config.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let content = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&content)?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, InMemoryConfigProvider, MAX_DELIBERATION_DELAY_MS};
    use crate::game::GameMode;

    fn manager(provider: InMemoryConfigProvider) -> ConfigManager<InMemoryConfigProvider, GameConfig> {
        ConfigManager::new(provider, YamlConfigSerializer)
    }

    #[test]
    fn test_missing_config_yields_default() {
        let manager = manager(InMemoryConfigProvider::default());

        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let manager = manager(InMemoryConfigProvider::with_content("mode: pvp\nalpha_beta: true\n"));

        let config = manager.get_config().unwrap();

        assert_eq!(config.mode, GameMode::PlayerVsPlayer);
        assert!(config.alpha_beta);
        assert_eq!(config.deliberation_delay_ms, GameConfig::default().deliberation_delay_ms);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let manager = manager(InMemoryConfigProvider::with_content("deliberation_delay_ms: 60000\n"));

        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        let manager = manager(InMemoryConfigProvider::with_content("mode: [not, a, mode]\n"));

        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_set_config_persists_and_caches() {
        let manager = manager(InMemoryConfigProvider::default());
        let config = GameConfig {
            deliberation_delay_ms: 100,
            ..GameConfig::default()
        };

        manager.set_config(&config).unwrap();

        assert_eq!(manager.get_config().unwrap(), config);
        let stored = manager.config_content_provider.get_config_content().unwrap().unwrap();
        assert!(stored.contains("deliberation_delay_ms: 100"));
    }

    #[test]
    fn test_set_config_refuses_invalid_values() {
        let manager = manager(InMemoryConfigProvider::default());
        let config = GameConfig {
            deliberation_delay_ms: MAX_DELIBERATION_DELAY_MS + 1,
            ..GameConfig::default()
        };

        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.config_content_provider.get_config_content().unwrap(), None);
    }

    #[test]
    fn test_file_provider_round_trip() {
        let path = std::env::temp_dir().join(format!("tictactoe_config_{}.yaml", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&path);

        assert_eq!(manager.get_config().unwrap(), GameConfig::default());

        let config = GameConfig {
            mode: GameMode::PlayerVsPlayer,
            ..GameConfig::default()
        };
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        std::fs::remove_file(&path).unwrap();
    }
}
