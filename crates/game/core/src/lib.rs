//! Deterministic showdown logic shared by the client and offline tools.
//!
//! `showdown-core` defines the canonical combat rules: the closed set of
//! monster variants, their stat records and formula tables, the clone
//! arena backing deathrattle resurrection, and the round loop that drives
//! two monsters to a terminal outcome. All randomness flows through the
//! injected [`env::RandomSource`], and all reporting flows out through
//! the structured [`engine::CombatEvent`] stream; the core never formats
//! display strings.
pub mod combat;
pub mod engine;
pub mod env;
pub mod monster;
pub mod stats;

pub use combat::{CorrosionOutcome, apply_strike, draw_strike};
pub use engine::{
    CombatEvent, EventSink, MonsterSnapshot, NullSink, Outcome, Side, armory,
    calculate_betting_odds, showdown,
};
pub use env::{RandomSource, ScriptedRandom, SeededRandom};
pub use monster::{CloneArena, CloneRecord, Monster, MonsterKind, SplitError};
pub use stats::{Family, FamilyStats, StatRecord, Weapon};
