//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one step. The phases run in a
//! fixed order: input, integration, platform resolution, star collection,
//! bomb spawning, star respawn, bomb hits.

use serde::{Deserialize, Serialize};

use super::collision::{overlapping, resolve_platforms};
use super::random::RandomSource;
use super::state::{Facing, GameEvent, GamePhase, GameState, Player};
use crate::tuning::{BombPlatformMode, Tuning};

/// Decoded movement intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump (only acts while standing on a platform)
    pub up: bool,
}

/// Advance the game state by one timestep, returning what happened
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // The world is frozen once the player has been hit
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    apply_input(&mut state.player, input, &state.tuning);

    // --- INTEGRATION ---
    let world = &state.world;
    world.integrate(&mut state.player.body, dt);
    for star in state.stars.iter_active_mut() {
        world.integrate(&mut star.body, dt);
    }
    for bomb in state.bombs.iter_active_mut() {
        world.integrate(&mut bomb.body, dt);
    }

    // --- PLATFORM RESOLUTION ---
    let platforms = world.platforms();
    resolve_platforms(&mut state.player.body, platforms, 0.0);
    let star_platform_bounce = state.tuning.star_platform_bounce;
    for star in state.stars.iter_active_mut() {
        let restitution = if star_platform_bounce {
            star.body.bounce
        } else {
            0.0
        };
        resolve_platforms(&mut star.body, platforms, restitution);
    }
    if state.tuning.bomb_platforms == BombPlatformMode::Bounce {
        for bomb in state.bombs.iter_active_mut() {
            let restitution = bomb.body.bounce;
            resolve_platforms(&mut bomb.body, platforms, restitution);
        }
    }

    // --- OVERLAPS ---
    let player_rect = state.player.body.rect();
    let star_hits = overlapping(&player_rect, state.stars.iter());
    let bomb_hits = overlapping(&player_rect, state.bombs.iter());

    // --- STAR COLLECTION ---
    let mut bomb_requested = false;
    for star_id in star_hits {
        if !state.stars.deactivate(star_id) {
            continue;
        }
        let score = state.score.increment(state.tuning.points_per_star);
        let remaining = state.active_star_count();
        log::debug!("Collected star {star_id} (score {score}, {remaining} left)");
        events.push(GameEvent::StarCollected { star_id, score });

        if remaining <= state.tuning.bomb_star_threshold {
            bomb_requested = true;
        }
    }

    // At most one bomb per step, however many stars were collected
    if bomb_requested {
        let event = state.spawn_bomb(rng);
        log::debug!("{event:?}");
        events.push(event);
    }

    if state.active_star_count() == 0 {
        state.stars.reactivate_all(state.tuning.star_respawn_y);
        let count = state.stars.len();
        log::debug!("All stars collected, respawning {count}");
        events.push(GameEvent::StarsRespawned { count });
    }

    // --- BOMB HIT ---
    if let Some(&bomb_id) = bomb_hits.first() {
        state.phase = GamePhase::GameOver;
        state.player.tinted = true;
        state.player.facing = Facing::Idle;
        let score = state.score.value();
        log::info!(
            "Player hit bomb {bomb_id} after {} ticks, final score {score}",
            state.time_ticks
        );
        events.push(GameEvent::PlayerHit { bomb_id });
        events.push(GameEvent::GameOver { score });
    }

    events
}

/// Turn movement intent into player velocity. Left wins over right.
fn apply_input(player: &mut Player, input: &TickInput, tuning: &Tuning) {
    let body = &mut player.body;
    if input.left {
        body.vel.x = -tuning.move_speed;
        player.facing = Facing::Left;
    } else if input.right {
        body.vel.x = tuning.move_speed;
        player.facing = Facing::Right;
    } else {
        body.vel.x = 0.0;
        player.facing = Facing::Idle;
    }

    if input.up && body.touching_down() {
        body.vel.y = -tuning.jump_impulse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::SIM_DT;
    use crate::sim::random::{ScriptedRandom, SimRng};
    use glam::Vec2;

    const IDLE: TickInput = TickInput {
        left: false,
        right: false,
        up: false,
    };

    fn new_state(config: &GameConfig) -> GameState {
        GameState::new(config, &mut SimRng::new(12345)).unwrap()
    }

    /// Run idle ticks until everything has fallen and settled
    fn settled_state(rng: &mut impl RandomSource) -> GameState {
        let mut state = new_state(&GameConfig::default());
        for _ in 0..600 {
            tick(&mut state, &IDLE, SIM_DT, rng);
        }
        state
    }

    /// Put the player on top of a star, at rest
    fn move_player_onto(state: &mut GameState, star_id: u32) {
        let pos = state.stars.get(star_id).unwrap().body.pos;
        state.player.body.pos = pos;
        state.player.body.vel = Vec2::ZERO;
    }

    #[test]
    fn test_player_lands_on_floor() {
        let mut state = new_state(&GameConfig::default());
        let mut rng = SimRng::new(1);

        for _ in 0..240 {
            tick(&mut state, &IDLE, SIM_DT, &mut rng);
        }

        let body = &state.player.body;
        assert!(body.touching_down());
        assert_eq!(body.vel.y, 0.0);
        // Floor top is y = 536, player is 48 tall
        assert!((body.pos.y - 512.0).abs() < 1e-3);
        assert_eq!(body.pos.x, 100.0);
    }

    #[test]
    fn test_stars_come_to_rest_on_platforms() {
        let state = settled_state(&mut SimRng::new(1));
        for star in state.stars.iter() {
            assert!(star.body.touching_down(), "star {} still falling", star.id);
            assert_eq!(star.body.vel.y, 0.0);
            for platform in state.world.platforms() {
                assert!(!star.body.rect().intersects(platform.rect()));
            }
        }
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut state = settled_state(&mut SimRng::new(1));
        let input = TickInput {
            left: true,
            right: true,
            up: false,
        };
        tick(&mut state, &input, SIM_DT, &mut SimRng::new(1));
        assert_eq!(state.player.body.vel.x, -160.0);
        assert_eq!(state.player.facing, Facing::Left);

        tick(&mut state, &IDLE, SIM_DT, &mut SimRng::new(1));
        assert_eq!(state.player.body.vel.x, 0.0);
        assert_eq!(state.player.facing, Facing::Idle);
    }

    #[test]
    fn test_jump_requires_touching_down() {
        let mut state = new_state(&GameConfig::default());
        let mut rng = SimRng::new(1);
        let jump = TickInput {
            up: true,
            ..IDLE
        };

        // Mid-air at the start: no jump
        tick(&mut state, &jump, SIM_DT, &mut rng);
        assert!(state.player.body.vel.y > 0.0);

        for _ in 0..240 {
            tick(&mut state, &IDLE, SIM_DT, &mut rng);
        }
        let ground_y = state.player.body.pos.y;

        tick(&mut state, &jump, SIM_DT, &mut rng);
        assert!(state.player.body.vel.y < -340.0);
        assert!(state.player.body.pos.y < ground_y);
        assert!(!state.player.body.touching_down());

        // Holding up in the air does not re-apply the impulse
        let vy = state.player.body.vel.y;
        tick(&mut state, &jump, SIM_DT, &mut rng);
        assert!(state.player.body.vel.y > vy);
    }

    #[test]
    fn test_collecting_a_star() {
        let mut rng = SimRng::new(1);
        let mut state = settled_state(&mut rng);
        move_player_onto(&mut state, 5);

        let events = tick(&mut state, &IDLE, SIM_DT, &mut rng);

        assert_eq!(
            events,
            vec![GameEvent::StarCollected {
                star_id: 5,
                score: 100
            }]
        );
        assert!(!state.stars.get(5).unwrap().active);
        assert_eq!(state.active_star_count(), 11);

        // Still standing on the same spot: nothing more to collect
        let events = tick(&mut state, &IDLE, SIM_DT, &mut rng);
        assert!(events.is_empty());
        assert_eq!(state.score.value(), 100);
    }

    #[test]
    fn test_collecting_ten_stars_spawns_one_bomb() {
        let mut rng = ScriptedRandom::new(vec![0.25, 0.5]);
        let mut state = settled_state(&mut rng);

        for star_id in 1..=10 {
            move_player_onto(&mut state, star_id);
            tick(&mut state, &IDLE, SIM_DT, &mut rng);
            let expected_bombs = if star_id < 10 { 0 } else { 1 };
            assert_eq!(state.bombs.len(), expected_bombs, "after star {star_id}");
        }

        assert_eq!(state.active_star_count(), 2);
        assert_eq!(state.score.value(), 1000);

        // Player ended up on star 10 at x = 642, so the bomb drops on the left
        let bomb = state.bombs.iter().next().unwrap();
        assert!((0.0..400.0).contains(&bomb.origin_x));
    }

    #[test]
    fn test_same_frame_collections_spawn_a_single_bomb() {
        let mut rng = ScriptedRandom::new(vec![0.5]);
        let mut state = settled_state(&mut rng);
        for star_id in 1..=9 {
            state.stars.deactivate(star_id);
        }

        // Two of the three remaining stars right on top of the player
        let player_pos = state.player.body.pos;
        for star_id in [10, 11] {
            let star = state.stars.get_mut(star_id).unwrap();
            star.body.pos = player_pos;
            star.body.vel = Vec2::ZERO;
        }

        let events = tick(&mut state, &IDLE, SIM_DT, &mut rng);

        assert_eq!(state.score.value(), 200);
        assert_eq!(state.active_star_count(), 1);
        assert_eq!(state.bombs.len(), 1);
        let spawned = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BombSpawned { .. }))
            .count();
        assert_eq!(spawned, 1);

        // Player is on the left, so the bomb is on the right
        let bomb = state.bombs.iter().next().unwrap();
        assert!((400.0..800.0).contains(&bomb.origin_x));
    }

    #[test]
    fn test_last_star_respawns_the_row() {
        let mut rng = ScriptedRandom::new(vec![0.5]);
        let mut state = settled_state(&mut rng);
        for star_id in 1..=11 {
            state.stars.deactivate(star_id);
        }
        move_player_onto(&mut state, 12);

        let events = tick(&mut state, &IDLE, SIM_DT, &mut rng);

        assert!(matches!(
            events[0],
            GameEvent::StarCollected { star_id: 12, .. }
        ));
        assert!(matches!(events[1], GameEvent::BombSpawned { .. }));
        assert_eq!(events[2], GameEvent::StarsRespawned { count: 12 });
        assert_eq!(state.active_star_count(), 12);
        assert_eq!(state.bombs.len(), 1);
        for (star, i) in state.stars.iter().zip(0..) {
            assert_eq!(star.body.pos, Vec2::new(12.0 + 70.0 * i as f32, 0.0));
        }
    }

    #[test]
    fn test_bomb_hit_ends_game_and_freezes_world() {
        let mut rng = ScriptedRandom::new(vec![0.5]);
        let mut state = settled_state(&mut rng);
        state.spawn_bomb(&mut rng);
        let bomb = state.bombs.get_mut(13).unwrap();
        bomb.body.pos = state.player.body.pos;

        let events = tick(&mut state, &IDLE, SIM_DT, &mut rng);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.player.tinted);
        assert_eq!(
            events,
            vec![
                GameEvent::PlayerHit { bomb_id: 13 },
                GameEvent::GameOver { score: 0 },
            ]
        );

        let player_pos = state.player.body.pos;
        let bomb_pos = state.bombs.get(13).unwrap().body.pos;
        let star_pos: Vec<Vec2> = state.stars.iter().map(|s| s.body.pos).collect();
        let ticks = state.time_ticks;

        let run = TickInput {
            right: true,
            up: true,
            ..IDLE
        };
        for _ in 0..10 {
            assert!(tick(&mut state, &run, SIM_DT, &mut rng).is_empty());
        }

        assert_eq!(state.player.body.pos, player_pos);
        assert_eq!(state.bombs.get(13).unwrap().body.pos, bomb_pos);
        let after: Vec<Vec2> = state.stars.iter().map(|s| s.body.pos).collect();
        assert_eq!(after, star_pos);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_bomb_platform_modes() {
        let mut bounce = new_state(&GameConfig::default());
        let mut config = GameConfig::default();
        config.tuning.bomb_platforms = BombPlatformMode::PassThrough;
        let mut pass = new_state(&config);

        for state in [&mut bounce, &mut pass] {
            state.spawn_bomb(&mut ScriptedRandom::new(vec![0.5]));
            let bomb = state.bombs.get_mut(13).unwrap();
            // Just above the floor (top at y = 536), falling fast
            bomb.body.pos = Vec2::new(600.0, 528.0);
            bomb.body.vel = Vec2::new(0.0, 240.0);
        }

        let mut rng = SimRng::new(1);
        tick(&mut bounce, &IDLE, SIM_DT, &mut rng);
        tick(&mut pass, &IDLE, SIM_DT, &mut rng);

        let bounced = &bounce.bombs.get(13).unwrap().body;
        assert!(bounced.vel.y < 0.0);
        assert_eq!(bounced.pos.y, 529.0);

        let passed = &pass.bombs.get(13).unwrap().body;
        assert!(passed.vel.y > 0.0);
        assert!(passed.pos.y > 529.0);
    }

    #[test]
    fn test_star_platform_bounce() {
        let mut config = GameConfig::default();
        let mut dead = new_state(&config);
        config.tuning.star_platform_bounce = true;
        let mut lively = new_state(&config);

        for state in [&mut dead, &mut lively] {
            let star = state.stars.get_mut(5).unwrap();
            // Just above the floor (top at y = 536), falling fast
            star.body.pos = Vec2::new(300.0, 524.0);
            star.body.vel = Vec2::new(0.0, 240.0);
        }

        let mut rng = SimRng::new(1);
        tick(&mut dead, &IDLE, SIM_DT, &mut rng);
        tick(&mut lively, &IDLE, SIM_DT, &mut rng);

        let stopped = &dead.stars.get(5).unwrap().body;
        assert_eq!(stopped.vel.y, 0.0);
        assert_eq!(stopped.pos.y, 525.0);

        let bounced = &lively.stars.get(5).unwrap().body;
        assert!(bounced.vel.y < -0.3 * 240.0);
        assert_eq!(bounced.pos.y, 525.0);
        assert!(bounced.touching_down());
    }

    #[test]
    fn test_determinism() {
        // Two games with the same seed and inputs end up identical
        let config = GameConfig::default();
        let mut rng1 = SimRng::new(99999);
        let mut rng2 = SimRng::new(99999);
        let mut state1 = GameState::new(&config, &mut rng1).unwrap();
        let mut state2 = GameState::new(&config, &mut rng2).unwrap();

        let inputs = [
            TickInput {
                right: true,
                ..IDLE
            },
            TickInput {
                right: true,
                up: true,
                left: false,
            },
            IDLE,
            TickInput {
                left: true,
                ..IDLE
            },
        ];

        for i in 0..2000 {
            let input = &inputs[(i / 50) % inputs.len()];
            tick(&mut state1, input, SIM_DT, &mut rng1);
            tick(&mut state2, input, SIM_DT, &mut rng2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.player.body.pos, state2.player.body.pos);
        assert_eq!(state1.bombs.len(), state2.bombs.len());
    }
}
