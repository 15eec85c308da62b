//! Startup configuration errors
//!
//! Stepping the simulation cannot fail; everything that could make a step
//! ill-defined is rejected here, before the first frame.

use thiserror::Error;

/// Errors raised while building a game from its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{what} must have a positive size, got {width}x{height}")]
    InvalidSize {
        what: &'static str,
        width: f32,
        height: f32,
    },

    #[error("world bounds must be positive, got {width}x{height}")]
    InvalidWorldBounds { width: f32, height: f32 },

    #[error("level needs at least one platform")]
    EmptyPlatforms,

    #[error("{what} bounce must be within [0, 1], got {value}")]
    InvalidBounce { what: &'static str, value: f32 },

    #[error("gravity must be finite, got ({x}, {y})")]
    NonFiniteGravity { x: f32, y: f32 },

    #[error("star row needs at least one star")]
    EmptyStarRow,

    #[error("{what} range is inverted: {min} > {max}")]
    InvalidRange {
        what: &'static str,
        min: f32,
        max: f32,
    },

    #[error("bomb split x must lie inside (0, {width}), got {split}")]
    InvalidBombSplit { split: f32, width: f32 },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}
