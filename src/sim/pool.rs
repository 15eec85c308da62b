//! Pools of stars and bombs
//!
//! Entities are never removed from a pool. Collecting a star flips its
//! `active` flag off; an inactive entity is invisible to physics, overlap
//! checks and counting until it is reactivated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;

/// A pooled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub body: Body,
    pub active: bool,
    /// X position the entity was spawned at, restored on reactivation
    pub origin_x: f32,
}

impl Entity {
    pub fn new(id: u32, body: Body) -> Self {
        let origin_x = body.pos.x;
        Self {
            id,
            body,
            active: true,
            origin_x,
        }
    }
}

/// Evenly spaced row of entities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub count: usize,
    pub start_x: f32,
    pub step_x: f32,
    pub y: f32,
}

impl RowLayout {
    /// Spawn positions, left to right
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.count).map(|i| Vec2::new(self.start_x + self.step_x * i as f32, self.y))
    }
}

/// A growable group of entities with per-entity active flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityPool {
    entities: Vec<Entity>,
}

impl EntityPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entity (bombs are spawned one at a time)
    pub fn spawn(&mut self, id: u32, body: Body) -> &Entity {
        self.entities.push(Entity::new(id, body));
        &self.entities[self.entities.len() - 1]
    }

    /// Add one entity per body, in order
    pub fn spawn_batch(&mut self, spawned: impl IntoIterator<Item = (u32, Body)>) {
        self.entities
            .extend(spawned.into_iter().map(|(id, body)| Entity::new(id, body)));
    }

    /// Take an entity out of play. Returns false if it was already inactive
    /// or does not exist.
    pub fn deactivate(&mut self, id: u32) -> bool {
        match self.get_mut(id) {
            Some(entity) if entity.active => {
                entity.active = false;
                entity.body.vel = Vec2::ZERO;
                true
            }
            _ => false,
        }
    }

    /// Bring every entity back into play at `(origin_x, y)`, at rest
    pub fn reactivate_all(&mut self, y: f32) {
        for entity in &mut self.entities {
            entity.body.reset(Vec2::new(entity.origin_x, y));
            entity.active = true;
        }
    }

    /// Number of active entities, counted fresh on every call
    pub fn active_count(&self) -> usize {
        self.entities.iter().filter(|e| e.active).count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.active)
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut().filter(|e| e.active)
    }
}
