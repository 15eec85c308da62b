//! Data-driven game balance
//!
//! Every gameplay number that is not part of the level geometry.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How bombs interact with platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BombPlatformMode {
    /// Bombs bounce off platforms with their own restitution
    #[default]
    Bounce,
    /// Bombs fly through platforms and only bounce off the world bounds
    PassThrough,
}

impl BombPlatformMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BombPlatformMode::Bounce => "bounce",
            BombPlatformMode::PassThrough => "pass_through",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Horizontal speed while a direction is held (pixels/s)
    pub move_speed: f32,
    /// Upward velocity applied by a jump (pixels/s)
    pub jump_impulse: f32,

    // === Stars ===
    /// Points per collected star
    pub points_per_star: u64,
    /// Star restitution is drawn from `[star_bounce_min, star_bounce_max)`.
    /// It only acts on platforms when `star_platform_bounce` is set.
    pub star_bounce_min: f32,
    pub star_bounce_max: f32,
    /// Stars rebound off platforms with their own restitution instead of
    /// stopping dead
    pub star_platform_bounce: bool,
    /// Height stars drop back in from after a full collection
    pub star_respawn_y: f32,

    // === Bombs ===
    /// A collection that leaves at most this many stars active spawns a bomb
    pub bomb_star_threshold: usize,
    /// Player x below this spawns bombs on the right side, otherwise the left
    pub bomb_split_x: f32,
    pub bomb_spawn_y: f32,
    /// Horizontal bomb speed is drawn from `[bomb_speed_x_min, bomb_speed_x_max]`
    pub bomb_speed_x_min: i32,
    pub bomb_speed_x_max: i32,
    /// Initial downward bomb speed
    pub bomb_speed_y: f32,
    pub bomb_bounce: f32,
    pub bomb_platforms: BombPlatformMode,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 160.0,
            jump_impulse: 350.0,

            points_per_star: 100,
            star_bounce_min: 0.4,
            star_bounce_max: 0.8,
            star_platform_bounce: false,
            star_respawn_y: 0.0,

            bomb_star_threshold: 2,
            bomb_split_x: 400.0,
            bomb_spawn_y: crate::consts::BOMB_SPAWN_Y,
            bomb_speed_x_min: -200,
            bomb_speed_x_max: 200,
            bomb_speed_y: 20.0,
            bomb_bounce: 1.0,
            bomb_platforms: BombPlatformMode::Bounce,
        }
    }
}

impl Tuning {
    /// Reject ranges the spawner could not draw from
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounce_ok = |b: f32| (0.0..=1.0).contains(&b);
        if !bounce_ok(self.star_bounce_min) || !bounce_ok(self.star_bounce_max) {
            return Err(ConfigError::InvalidBounce {
                what: "star",
                value: if bounce_ok(self.star_bounce_min) {
                    self.star_bounce_max
                } else {
                    self.star_bounce_min
                },
            });
        }
        if self.star_bounce_max < self.star_bounce_min {
            return Err(ConfigError::InvalidRange {
                what: "star bounce",
                min: self.star_bounce_min,
                max: self.star_bounce_max,
            });
        }
        if !bounce_ok(self.bomb_bounce) {
            return Err(ConfigError::InvalidBounce {
                what: "bomb",
                value: self.bomb_bounce,
            });
        }
        if self.bomb_speed_x_max < self.bomb_speed_x_min {
            return Err(ConfigError::InvalidRange {
                what: "bomb horizontal speed",
                min: self.bomb_speed_x_min as f32,
                max: self.bomb_speed_x_max as f32,
            });
        }
        Ok(())
    }
}
