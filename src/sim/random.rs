//! Random number sources for spawning
//!
//! The simulation only draws random numbers through [`RandomSource`], so a
//! seeded PCG stream gives reproducible runs and tests can script exact values.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

pub trait RandomSource {
    /// Uniform float in `[min, max)`; returns `min` for an empty range
    fn range_f32(&mut self, min: f32, max: f32) -> f32;

    /// Uniform integer in `[min, max)`; returns `min` for an empty range
    fn range_i32(&mut self, min: i32, max: i32) -> i32;
}

/// Seeded PCG32 stream
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SimRng {
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }

    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }
}

/// Replays a fixed list of unit values in `[0, 1)`, cycling when exhausted
///
/// Each draw maps the next value linearly onto the requested range, so a
/// value of 0.0 always yields `min` and 0.5 yields the midpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v.clamp(0.0, 1.0 - f32::EPSILON)
    }
}

impl RandomSource for ScriptedRandom {
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        let t = self.next_unit();
        if max > min { min + (max - min) * t } else { min }
    }

    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        let t = self.next_unit();
        if max > min {
            let span = (max - min) as f32;
            (min + (span * t).floor() as i32).min(max - 1)
        } else {
            min
        }
    }
}
