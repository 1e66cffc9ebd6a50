//! Base-power evaluation.

use crate::env::RandomSource;
use crate::monster::MonsterKind;
use crate::monster::tables::{self, CritRoll};
use crate::stats::{StatRecord, Weapon};

/// Base power of a Humanoid stat bundle under its equipped weapon.
///
/// An unequipped or foreign weapon yields zero through the weight table;
/// this is the "no weapon, no power" policy, not an error.
pub fn humanoid_power(
    kind: MonsterKind,
    weapon: Option<Weapon>,
    record: &StatRecord,
    intelligence: i32,
) -> f64 {
    let Some(weapon) = weapon else {
        return 0.0;
    };
    let weights = tables::weapon_weights(kind, weapon);
    weights.armor * record.armor as f64
        + weights.vitality * record.vitality as f64
        + weights.speed * record.speed
        + weights.intelligence * intelligence as f64
}

/// Base power of an Ooze stat bundle.
pub fn ooze_power(kind: MonsterKind, record: &StatRecord, volume: i32, acidity: i32) -> f64 {
    let weights = tables::ooze_weights(kind);
    weights.vitality * record.vitality as f64
        + weights.volume * volume as f64
        + weights.acidity * acidity as f64
}

/// Applies a critical-hit roll to an already-computed base power.
///
/// Always consumes exactly one draw, even when the base is zero; the
/// draw order is part of the observable contract under scripted sources.
pub fn roll_crit(crit: &CritRoll, base: f64, rng: &mut dyn RandomSource) -> f64 {
    if rng.next_f64() > crit.threshold {
        base * crit.multiplier
    } else {
        base
    }
}
