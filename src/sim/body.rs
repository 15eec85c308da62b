//! Axis-aligned rectangle bodies
//!
//! Positions are rectangle centres in screen space (+y points down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An axis-aligned rectangle described by its min and max corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict intersection: rectangles that only share an edge do not overlap
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// A simulated rectangle with velocity and physical parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Centre position
    pub pos: Vec2,
    pub vel: Vec2,
    size: Vec2,
    /// Restitution applied when hitting world bounds, in [0, 1]
    pub bounce: f32,
    pub collide_world_bounds: bool,
    /// Resting on a platform this step (written by the collision resolver)
    #[serde(default)]
    touching_down: bool,
}

impl Body {
    /// Create a body at rest. Non-positive sizes are rejected.
    pub fn new(pos: Vec2, size: Vec2) -> Result<Self, ConfigError> {
        check_size("body", size)?;
        Ok(Self {
            pos,
            vel: Vec2::ZERO,
            size,
            bounce: 0.0,
            collide_world_bounds: false,
            touching_down: false,
        })
    }

    pub fn with_bounce(mut self, bounce: f32) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&bounce) {
            return Err(ConfigError::InvalidBounce {
                what: "body",
                value: bounce,
            });
        }
        self.bounce = bounce;
        Ok(self)
    }

    pub fn with_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    #[inline]
    pub fn touching_down(&self) -> bool {
        self.touching_down
    }

    pub(crate) fn set_touching_down(&mut self, touching: bool) {
        self.touching_down = touching;
    }

    /// Put the body back at rest at `pos` (used when re-enabling an entity)
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.touching_down = false;
    }
}

/// A static, immovable platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    pub fn new(center: Vec2, size: Vec2) -> Result<Self, ConfigError> {
        check_size("platform", size)?;
        Ok(Self {
            rect: Rect::from_center(center, size),
        })
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }
}

pub(crate) fn check_size(what: &'static str, size: Vec2) -> Result<(), ConfigError> {
    // NaN fails both comparisons, so it is rejected too
    if size.x > 0.0 && size.y > 0.0 && size.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize {
            what,
            width: size.x,
            height: size.y,
        })
    }
}
