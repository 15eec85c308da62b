//! Star Catcher - a small arcade platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `game`: Host-facing wrapper with fixed timestep and query API
//! - `config`: Data-driven level layout and tuning, loadable from JSON
//! - `error`: Configuration errors raised at startup

pub mod config;
pub mod error;
pub mod game;
pub mod level;
pub mod sim;
pub mod tuning;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::Game;
pub use level::Level;
pub use tuning::{BombPlatformMode, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for stable landings)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the accumulator will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Downward gravity (pixels/s²)
    pub const GRAVITY_Y: f32 = 300.0;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_BOUNCE: f32 = 0.2;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 450.0;

    /// Star body and starting row
    pub const STAR_WIDTH: f32 = 24.0;
    pub const STAR_HEIGHT: f32 = 22.0;
    pub const STAR_COUNT: usize = 12;
    pub const STAR_START_X: f32 = 12.0;
    pub const STAR_STEP_X: f32 = 70.0;

    /// Bomb body
    pub const BOMB_SIZE: f32 = 14.0;
    pub const BOMB_SPAWN_Y: f32 = 16.0;

    /// Ground sprite is 400x32, the floor uses it at scale 2
    pub const PLATFORM_WIDTH: f32 = 400.0;
    pub const PLATFORM_HEIGHT: f32 = 32.0;

    /// Text shown once the player touches a bomb
    pub const GAME_OVER_MESSAGE: &str = "GAME OVER!";
}
