pub mod config;
pub mod game;
pub mod logger;

pub use config::GameConfig;
pub use game::*;
