//! Configuration management for the mixmatch engine

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::GameError;

/// Main configuration for the mixmatch engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MixmatchConfig {
    /// Round timing configuration
    pub game: GameConfig,
    /// Leaderboard persistence configuration
    pub leaderboard: LeaderboardConfig,
}

/// Round timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Round length in seconds
    pub time_limit_seconds: u32,
    /// Pause between blanking the board and opening for input
    pub arming_delay_ms: u64,
    /// Countdown resolution
    pub tick_interval_ms: u64,
    /// How long a mismatched pair stays revealed
    pub mismatch_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit_seconds: 50,
            arming_delay_ms: 500,
            tick_interval_ms: 1000,
            mismatch_delay_ms: 1000,
        }
    }
}

/// Leaderboard persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// File holding the serialized leaderboard
    pub slot_path: String,
    /// How many entries the leaderboard view shows
    pub display_size: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            slot_path: "mix_or_match_leaderboard.json".to_string(),
            display_size: 5,
        }
    }
}

impl MixmatchConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let content = fs::read_to_string(path).map_err(|e| GameError::Configuration {
            message: format!("Failed to read config file: {}", e),
            field: "config_file".to_string(),
        })?;

        let config: MixmatchConfig = toml::from_str(&content).map_err(|e| GameError::Configuration {
            message: format!("Failed to parse config file: {}", e),
            field: "config_format".to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GameError> {
        let content = toml::to_string_pretty(self).map_err(|e| GameError::Configuration {
            message: format!("Failed to serialize config: {}", e),
            field: "config_serialization".to_string(),
        })?;

        fs::write(path, content).map_err(|e| GameError::Configuration {
            message: format!("Failed to write config file: {}", e),
            field: "config_write".to_string(),
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), GameError> {
        if self.game.time_limit_seconds == 0 {
            return Err(GameError::Configuration {
                message: "Time limit must be greater than 0".to_string(),
                field: "game.time_limit_seconds".to_string(),
            });
        }

        if self.game.tick_interval_ms == 0 {
            return Err(GameError::Configuration {
                message: "Tick interval must be greater than 0".to_string(),
                field: "game.tick_interval_ms".to_string(),
            });
        }

        if self.leaderboard.display_size == 0 {
            return Err(GameError::Configuration {
                message: "Leaderboard display size must be greater than 0".to_string(),
                field: "leaderboard.display_size".to_string(),
            });
        }

        if self.leaderboard.slot_path.is_empty() {
            return Err(GameError::Configuration {
                message: "Leaderboard slot path must not be empty".to_string(),
                field: "leaderboard.slot_path".to_string(),
            });
        }

        Ok(())
    }

    /// Create a configuration suited to fast automated play-throughs
    pub fn quick() -> Self {
        Self {
            game: GameConfig {
                time_limit_seconds: 50,
                arming_delay_ms: 10,
                tick_interval_ms: 50,
                mismatch_delay_ms: 20,
            },
            leaderboard: LeaderboardConfig::default(),
        }
    }
}
