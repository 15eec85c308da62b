//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::pool::EntityPool;
use super::random::RandomSource;
use super::world::World;
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player touched a bomb; the world is frozen
    GameOver,
}

/// Which way the player is facing (selects the presentation animation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    #[default]
    Idle,
}

/// The player's character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Drawn with a red tint after being hit
    pub tinted: bool,
    pub facing: Facing,
}

impl Player {
    pub fn new(pos: Vec2) -> Result<Self, ConfigError> {
        let body = Body::new(pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))?
            .with_bounce(PLAYER_BOUNCE)?
            .with_world_bounds();
        Ok(Self {
            body,
            tinted: false,
            facing: Facing::Idle,
        })
    }
}

/// Score counter. Only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    value: u64,
}

impl ScoreKeeper {
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Add points, returning the new total
    pub fn increment(&mut self, points: u64) -> u64 {
        self.value = self.value.saturating_add(points);
        self.value
    }
}

/// Something that happened during a step, in the order it happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    StarCollected { star_id: u32, score: u64 },
    BombSpawned { bomb_id: u32, pos: Vec2, vel: Vec2 },
    StarsRespawned { count: usize },
    PlayerHit { bomb_id: u32 },
    GameOver { score: u64 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub world: World,
    pub tuning: Tuning,
    pub player: Player,
    pub stars: EntityPool,
    pub bombs: EntityPool,
    pub score: ScoreKeeper,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Validated body every new bomb is cloned from
    bomb_template: Body,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Build the opening scene: player at its start, a full row of stars,
    /// no bombs
    pub fn new(config: &GameConfig, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        let world = config.build_world()?;
        let player = Player::new(config.level.player_start)?;
        let bomb_template = Body::new(Vec2::ZERO, Vec2::splat(BOMB_SIZE))?
            .with_bounce(config.tuning.bomb_bounce)?
            .with_world_bounds();

        let mut state = Self {
            world,
            tuning: config.tuning.clone(),
            player,
            stars: EntityPool::new(),
            bombs: EntityPool::new(),
            score: ScoreKeeper::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            bomb_template,
            next_id: 1,
        };

        let mut spawned = Vec::with_capacity(config.level.stars.count);
        for pos in config.level.stars.positions() {
            let bounce = rng.range_f32(state.tuning.star_bounce_min, state.tuning.star_bounce_max);
            let body = Body::new(pos, Vec2::new(STAR_WIDTH, STAR_HEIGHT))?.with_bounce(bounce)?;
            spawned.push((state.next_entity_id(), body));
        }
        state.stars.spawn_batch(spawned);

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of stars still in play
    #[inline]
    pub fn active_star_count(&self) -> usize {
        self.stars.active_count()
    }

    /// Drop a new bomb on the side of the world away from the player
    pub fn spawn_bomb(&mut self, rng: &mut impl RandomSource) -> GameEvent {
        let split = self.tuning.bomb_split_x;
        let world_width = self.world.bounds().max.x;
        let x = if self.player.body.pos.x < split {
            rng.range_i32(split as i32, world_width as i32)
        } else {
            rng.range_i32(0, split as i32)
        } as f32;
        let vx = rng.range_i32(
            self.tuning.bomb_speed_x_min,
            self.tuning.bomb_speed_x_max.saturating_add(1),
        ) as f32;

        let mut body = self.bomb_template.clone();
        body.pos = Vec2::new(x, self.tuning.bomb_spawn_y);
        body.vel = Vec2::new(vx, self.tuning.bomb_speed_y);

        let id = self.next_entity_id();
        let bomb = self.bombs.spawn(id, body);
        GameEvent::BombSpawned {
            bomb_id: id,
            pos: bomb.body.pos,
            vel: bomb.body.vel,
        }
    }
}
