//! Host-facing game wrapper
//!
//! Owns the simulation state and its random source, runs the fixed-timestep
//! accumulator and answers read-only queries. A renderer or input layer only
//! ever talks to this type.

use crate::config::GameConfig;
use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{GamePhase, GameState, RandomSource, SimRng, Snapshot, TickInput, tick};

pub struct Game<R: RandomSource = SimRng> {
    state: GameState,
    rng: R,
    accumulator: f32,
    paused: bool,
}

impl Game<SimRng> {
    /// Start a game drawing spawn randomness from a seeded PCG stream
    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let game = Self::new(config, SimRng::new(seed))?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(game)
    }
}

impl<R: RandomSource> Game<R> {
    pub fn new(config: &GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        let state = GameState::new(config, &mut rng)?;
        log::info!(
            "New game: {} platforms, {} stars, bomb platform mode {}",
            state.world.platforms().len(),
            state.stars.len(),
            config.tuning.bomb_platforms.as_str()
        );
        Ok(Self {
            state,
            rng,
            accumulator: 0.0,
            paused: false,
        })
    }

    /// Advance exactly one step of `dt` seconds
    pub fn step(&mut self, dt: f32, input: &TickInput) -> Snapshot {
        let events = if self.paused {
            Vec::new()
        } else if !dt.is_finite() || dt < 0.0 {
            log::warn!("Ignoring step with invalid dt {dt}");
            Vec::new()
        } else {
            tick(&mut self.state, input, dt, &mut self.rng)
        };
        Snapshot::capture(&self.state, events)
    }

    /// Feed one rendered frame of `frame_dt` seconds through the fixed
    /// timestep, running as many `SIM_DT` steps as have accumulated
    pub fn update(&mut self, frame_dt: f32, input: &TickInput) -> Snapshot {
        let mut events = Vec::new();
        if self.paused {
            return Snapshot::capture(&self.state, events);
        }

        let frame_dt = if frame_dt.is_finite() {
            frame_dt
        } else {
            log::warn!("Non-finite frame time {frame_dt}, treating as 0");
            0.0
        };
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        if !self.accumulator.is_finite() {
            self.accumulator = 0.0;
        }

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(tick(&mut self.state, input, SIM_DT, &mut self.rng));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if self.accumulator >= SIM_DT {
            log::warn!(
                "Dropping {:.1} ms of simulation time after {} substeps",
                self.accumulator * 1000.0,
                substeps
            );
            self.accumulator = 0.0;
        }

        Snapshot::capture(&self.state, events)
    }

    /// Stop (or resume) stepping. While paused the world is frozen.
    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u64 {
        self.state.score.value()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, Vec::new())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
