//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Injected random source only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod pool;
pub mod random;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod world;

pub use body::{Body, Platform, Rect};
pub use collision::{CollisionResult, body_platform_collision, overlapping, resolve_platforms};
pub use pool::{Entity, EntityPool, RowLayout};
pub use random::{RandomSource, ScriptedRandom, SimRng};
pub use snapshot::{PlayerPose, Pose, Snapshot};
pub use state::{Facing, GameEvent, GamePhase, GameState, Player, ScoreKeeper};
pub use tick::{TickInput, tick};
pub use world::World;
