//! Game configuration
//!
//! Level layout plus balance numbers. Loaded from JSON; any field left out
//! falls back to the classic scene.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;
use crate::sim::World;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub level: Level,
    pub tuning: Tuning,
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded config from {} ({} platforms, {} stars)",
            path.display(),
            config.level.platforms.len(),
            config.level.stars.count
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check everything a game needs before the first step
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_world().map(|_| ())
    }

    /// Validate and build the static world
    pub fn build_world(&self) -> Result<World, ConfigError> {
        self.tuning.validate()?;
        let world = self.level.build_world()?;

        // Bombs must be able to spawn on either side of the split
        let split = self.tuning.bomb_split_x;
        let width = world.bounds().max.x;
        if !(1..(width as i32)).contains(&(split as i32)) {
            return Err(ConfigError::InvalidBombSplit { split, width });
        }
        Ok(world)
    }
}
