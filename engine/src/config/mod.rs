mod config_content_provider;
mod config_manager;
mod config_serializer;
mod game_config;

use std::io;
use std::path::PathBuf;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider, InMemoryConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use game_config::{GameConfig, MAX_DELIBERATION_DELAY_MS};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to deserialize config: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),
    #[error("config validation error: {0}")]
    Invalid(String),
}
