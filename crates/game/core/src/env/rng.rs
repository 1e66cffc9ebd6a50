//! Random source capability for combat resolution.
//!
//! Every random draw in the core (critical-hit rolls, strike spreads,
//! weapon selection, clone counts, corrosion checks) goes through
//! [`RandomSource`]. Production code injects [`SeededRandom`]; tests
//! inject [`ScriptedRandom`] with a fixed sequence so each draw site can
//! be steered individually.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random values in `[0, 1)`.
///
/// Implementations are stateful streams: each call consumes one draw.
/// The core specifies draw *order* precisely (see the per-operation
/// docs on [`crate::monster::Monster`]) so scripted sources can line up
/// values with draw sites.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Seedable random source backed by [`rand::rngs::StdRng`].
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Deterministic source: the same seed always produces the same
    /// combat outcome for the same sequence of operations.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible source seeded from OS entropy; matches the
    /// unseeded behavior of an ambient generator without being one.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Scripted random source replaying a fixed sequence of values.
///
/// Intended for tests and replay tooling. Panics when the script runs
/// out, which in a test points straight at the draw site that consumed
/// more values than the scenario scripted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.values
            .pop_front()
            .expect("scripted random source exhausted")
    }
}
