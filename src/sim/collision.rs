//! Collision detection and response for axis-aligned rectangles
//!
//! Two separate jobs live here: pushing dynamic bodies out of static
//! platforms, and reporting overlaps between a body and a group of entities
//! (which never moves anything).

use glam::Vec2;

use super::body::{Body, Platform, Rect};
use super::pool::Entity;

/// Result of a rectangle-vs-rectangle penetration check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the rectangles overlap
    pub hit: bool,
    /// Unit axis to push the body along (points away from the platform)
    pub normal: Vec2,
    /// How far the body must move along `normal` to separate
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Minimum translation needed to push `body` out of `platform`
///
/// Picks the axis of least penetration. When both axes penetrate equally the
/// vertical axis wins, so floors and ceilings take priority over walls.
pub fn body_platform_collision(body: &Rect, platform: &Rect) -> CollisionResult {
    if !body.intersects(platform) {
        return CollisionResult::miss();
    }

    let body_center = body.center();
    let platform_center = platform.center();

    // Distance to escape on each side, pick the shorter per axis
    let push_left = body.max.x - platform.min.x;
    let push_right = platform.max.x - body.min.x;
    let push_up = body.max.y - platform.min.y;
    let push_down = platform.max.y - body.min.y;

    let (pen_x, dir_x) = if push_left < push_right
        || (push_left == push_right && body_center.x <= platform_center.x)
    {
        (push_left, -1.0)
    } else {
        (push_right, 1.0)
    };
    let (pen_y, dir_y) = if push_up < push_down
        || (push_up == push_down && body_center.y <= platform_center.y)
    {
        (push_up, -1.0)
    } else {
        (push_down, 1.0)
    };

    if pen_y <= pen_x {
        CollisionResult {
            hit: true,
            normal: Vec2::new(0.0, dir_y),
            penetration: pen_y,
        }
    } else {
        CollisionResult {
            hit: true,
            normal: Vec2::new(dir_x, 0.0),
            penetration: pen_x,
        }
    }
}

/// Push a dynamic body out of every platform it overlaps
///
/// `touching_down` is cleared first and set again when a platform pushed the
/// body upward. The velocity component along the push axis becomes
/// `-v * restitution`, so a restitution of zero stops the body dead.
///
/// Returns true if any platform was hit.
pub fn resolve_platforms(body: &mut Body, platforms: &[Platform], restitution: f32) -> bool {
    body.set_touching_down(false);
    let mut any_hit = false;

    for platform in platforms {
        let result = body_platform_collision(&body.rect(), platform.rect());
        if !result.hit {
            continue;
        }
        any_hit = true;

        // Snap flush to the platform edge rather than adding the penetration,
        // so the resolved rectangles share an edge exactly
        let half = body.half_size();
        let edge = platform.rect();
        match (result.normal.x, result.normal.y) {
            (x, _) if x < 0.0 => body.pos.x = edge.min.x - half.x,
            (x, _) if x > 0.0 => body.pos.x = edge.max.x + half.x,
            (_, y) if y < 0.0 => body.pos.y = edge.min.y - half.y,
            _ => body.pos.y = edge.max.y + half.y,
        }

        if result.normal.x != 0.0 {
            // Only respond if moving into the platform
            if body.vel.x * result.normal.x < 0.0 {
                body.vel.x = -body.vel.x * restitution;
            }
        } else {
            if body.vel.y * result.normal.y < 0.0 {
                body.vel.y = -body.vel.y * restitution;
            }
            if result.normal.y < 0.0 {
                body.set_touching_down(true);
            }
        }
    }

    any_hit
}

/// Ids of every active entity whose rectangle overlaps `subject`
///
/// Level-triggered: an overlap is reported on every call while it persists,
/// so callers must make their response idempotent.
pub fn overlapping<'a>(
    subject: &Rect,
    candidates: impl IntoIterator<Item = &'a Entity>,
) -> Vec<u32> {
    candidates
        .into_iter()
        .filter(|e| e.active && subject.intersects(&e.body.rect()))
        .map(|e| e.id)
        .collect()
}
