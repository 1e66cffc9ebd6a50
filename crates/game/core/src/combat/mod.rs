//! Combat math.
//!
//! Pure helpers shared by every variant's attack path: base-power
//! evaluation from the formula tables, the uniform strike draw, and the
//! armor-first absorption rule. All randomness comes in through the
//! injected [`crate::env::RandomSource`]; all mutation is confined to
//! the target [`crate::stats::StatRecord`] passed to [`apply_strike`].

mod corrosion;
mod power;
mod strike;

pub use corrosion::CorrosionOutcome;
pub use power::{humanoid_power, ooze_power, roll_crit};
pub use strike::{apply_strike, draw_strike};
