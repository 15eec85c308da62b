//! Read-only view of a step for the presentation layer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Facing, GameEvent, GamePhase, GameState};
use crate::consts::GAME_OVER_MESSAGE;

/// Position of a star or bomb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub id: u32,
    pub pos: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    pub tinted: bool,
    pub touching_down: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: PlayerPose,
    /// Active stars only
    pub stars: Vec<Pose>,
    pub bombs: Vec<Pose>,
    pub score: u64,
    pub phase: GamePhase,
    pub game_over_message: Option<&'static str>,
    /// Events produced by the step(s) that led to this frame
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState, events: Vec<GameEvent>) -> Self {
        let player = &state.player;
        Self {
            player: PlayerPose {
                pos: player.body.pos,
                vel: player.body.vel,
                facing: player.facing,
                tinted: player.tinted,
                touching_down: player.body.touching_down(),
            },
            stars: state
                .stars
                .iter_active()
                .map(|e| Pose {
                    id: e.id,
                    pos: e.body.pos,
                })
                .collect(),
            bombs: state
                .bombs
                .iter_active()
                .map(|e| Pose {
                    id: e.id,
                    pos: e.body.pos,
                })
                .collect(),
            score: state.score.value(),
            phase: state.phase,
            game_over_message: match state.phase {
                GamePhase::GameOver => Some(GAME_OVER_MESSAGE),
                GamePhase::Playing => None,
            },
            events,
        }
    }

    /// Score line as shown in the HUD
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}
