//! Injected capabilities the combat core depends on.
//!
//! The only ambient dependency of the rules is randomness, and it is
//! passed in explicitly so combat outcomes are reproducible under test.
mod rng;

pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
