//! Level geometry: world size, gravity, platforms and spawn points

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Platform, RowLayout, World};

/// A platform as written in a level file (centre and size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlatformSpec {
    /// The ground sprite at its native size
    pub const fn ground(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PLATFORM_WIDTH,
            height: PLATFORM_HEIGHT,
        }
    }

    /// Scale around the centre
    pub const fn scaled(self, scale: f32) -> Self {
        Self {
            width: self.width * scale,
            height: self.height * scale,
            ..self
        }
    }

    pub fn build(&self) -> Result<Platform, ConfigError> {
        Platform::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    pub world_size: Vec2,
    pub gravity: Vec2,
    pub platforms: Vec<PlatformSpec>,
    pub player_start: Vec2,
    pub stars: RowLayout,
}

impl Default for Level {
    /// The classic four-platform scene
    fn default() -> Self {
        Self {
            world_size: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            gravity: Vec2::new(0.0, GRAVITY_Y),
            platforms: vec![
                PlatformSpec::ground(400.0, 568.0).scaled(2.0),
                PlatformSpec::ground(600.0, 400.0),
                PlatformSpec::ground(50.0, 250.0),
                PlatformSpec::ground(750.0, 220.0),
            ],
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            stars: RowLayout {
                count: STAR_COUNT,
                start_x: STAR_START_X,
                step_x: STAR_STEP_X,
                y: 0.0,
            },
        }
    }
}

impl Level {
    /// Validate the layout and build the static world
    pub fn build_world(&self) -> Result<World, ConfigError> {
        if self.stars.count == 0 {
            return Err(ConfigError::EmptyStarRow);
        }
        let platforms = self
            .platforms
            .iter()
            .map(PlatformSpec::build)
            .collect::<Result<Vec<_>, _>>()?;
        World::new(self.world_size, self.gravity, platforms)
    }
}
