//! Game configuration

use serde::{Deserialize, Serialize};

/// Configuration trait with file loading for TOML and RON formats.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,
}

impl Config for GameConfig {}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayConfig {
    /// Board width in cells
    pub board_width: i32,

    /// Board height in cells
    pub board_height: i32,

    /// Number of pellets scattered on the board
    pub pellet_count: u32,

    /// Every n-th pellet is a power pellet (0 disables them)
    pub power_pellet_every: u32,

    /// Number of ghosts
    pub ghost_count: u32,

    /// Starting lives
    pub lives: u32,

    /// Duration of power-pellet energy, in ticks
    pub energize_ticks: u32,

    /// Points for eating a ghost while energized
    pub ghost_points: u32,

    /// Points for the bonus fruit (0 disables it)
    pub fruit_points: u32,

    /// Maximum simulation ticks before the run stops
    pub max_ticks: u32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            board_width: 16,
            board_height: 16,
            pellet_count: 40,
            power_pellet_every: 10,
            ghost_count: 4,
            lives: 3,
            energize_ticks: 20,
            ghost_points: 200,
            fruit_points: 100,
            max_ticks: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_playable_board() {
        let config = GameConfig::default();
        assert!(config.gameplay.board_width > 0);
        assert!(config.gameplay.pellet_count > 0);
        assert!(config.gameplay.lives > 0);
    }

    #[test]
    fn toml_round_trip() {
        let config = GameConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.gameplay.pellet_count, config.gameplay.pellet_count);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = std::env::temp_dir().join("muncher_config_test.yaml");
        std::fs::write(&path, "gameplay: {}").unwrap();
        let result = GameConfig::load_from_file(path.to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
