//! Star Catcher headless runner
//!
//! Drives the simulation with a simple star-chasing autopilot and logs what
//! happens. Usage: `star-catcher [config.json] [seed] [seconds]`

use star_catcher::consts::SIM_DT;
use star_catcher::sim::{GameEvent, GamePhase, Snapshot, TickInput};
use star_catcher::{Game, GameConfig};

/// Rendered frame length the runner pretends to have
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Star Catcher (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next().as_deref() {
        Some(path) if path != "-" => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        _ => GameConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);

    let mut game = match Game::with_seed(&config, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let mut snapshot = game.snapshot();
    let frames = (seconds / FRAME_DT) as u32;
    for frame in 0..frames {
        let input = autopilot(&snapshot);
        snapshot = game.update(FRAME_DT, &input);

        for event in &snapshot.events {
            match event {
                GameEvent::BombSpawned { bomb_id, pos, .. } => {
                    log::info!("Bomb {bomb_id} dropped at x = {}", pos.x);
                }
                GameEvent::StarsRespawned { count } => {
                    log::info!("Row cleared, {count} stars respawned");
                }
                other => log::debug!("{other:?}"),
            }
        }

        if snapshot.phase == GamePhase::GameOver {
            log::info!(
                "{} after {:.1}s",
                snapshot.game_over_message.unwrap_or_default(),
                (frame + 1) as f32 * FRAME_DT
            );
            break;
        }
    }

    println!(
        "{} ({} ticks of {:.4}s, {} bombs)",
        snapshot.score_text(),
        game.state().time_ticks,
        SIM_DT,
        snapshot.bombs.len()
    );
}

/// Walk toward the nearest star, jumping when it sits on a higher ledge
fn autopilot(snapshot: &Snapshot) -> TickInput {
    let player = &snapshot.player;
    let Some(target) = snapshot
        .stars
        .iter()
        .min_by(|a, b| {
            let da = a.pos.distance_squared(player.pos);
            let db = b.pos.distance_squared(player.pos);
            da.total_cmp(&db)
        })
        .map(|s| s.pos)
    else {
        return TickInput::default();
    };

    let dx = target.x - player.pos.x;
    TickInput {
        left: dx < -4.0,
        right: dx > 4.0,
        up: player.touching_down && target.y < player.pos.y - 40.0,
    }
}
