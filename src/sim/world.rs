//! Gravity, world bounds and the static platform set

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Platform, Rect};
use crate::error::ConfigError;

/// The static part of the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub gravity: Vec2,
    bounds: Rect,
    platforms: Vec<Platform>,
}

impl World {
    /// Build a world spanning `(0, 0)..size`. Fails on non-positive bounds,
    /// non-finite gravity or an empty platform list.
    pub fn new(size: Vec2, gravity: Vec2, platforms: Vec<Platform>) -> Result<Self, ConfigError> {
        if !(size.x > 0.0 && size.y > 0.0 && size.is_finite()) {
            return Err(ConfigError::InvalidWorldBounds {
                width: size.x,
                height: size.y,
            });
        }
        if !gravity.is_finite() {
            return Err(ConfigError::NonFiniteGravity {
                x: gravity.x,
                y: gravity.y,
            });
        }
        if platforms.is_empty() {
            return Err(ConfigError::EmptyPlatforms);
        }
        Ok(Self {
            gravity,
            bounds: Rect {
                min: Vec2::ZERO,
                max: size,
            },
            platforms,
        })
    }

    #[inline]
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    #[inline]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Advance one dynamic body by `dt`: gravity, then velocity, then bounds
    pub fn integrate(&self, body: &mut Body, dt: f32) {
        body.vel += self.gravity * dt;
        body.pos += body.vel * dt;
        if body.collide_world_bounds {
            self.clamp_to_bounds(body);
        }
    }

    /// Keep the body inside the world, reflecting or stopping the
    /// velocity component that points out of it
    fn clamp_to_bounds(&self, body: &mut Body) {
        let half = body.half_size();
        let min = self.bounds.min + half;
        let max = self.bounds.max - half;
        let bounce = body.bounce;

        let respond = |v: f32| if bounce > 0.0 { -v * bounce } else { 0.0 };

        if body.pos.x < min.x {
            body.pos.x = min.x;
            if body.vel.x < 0.0 {
                body.vel.x = respond(body.vel.x);
            }
        } else if body.pos.x > max.x {
            body.pos.x = max.x;
            if body.vel.x > 0.0 {
                body.vel.x = respond(body.vel.x);
            }
        }

        if body.pos.y < min.y {
            body.pos.y = min.y;
            if body.vel.y < 0.0 {
                body.vel.y = respond(body.vel.y);
            }
        } else if body.pos.y > max.y {
            body.pos.y = max.y;
            if body.vel.y > 0.0 {
                body.vel.y = respond(body.vel.y);
            }
        }
    }
}
