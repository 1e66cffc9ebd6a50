//! Strike draw and armor-first absorption.

use crate::env::RandomSource;
use crate::monster::tables::StrikeSpread;
use crate::stats::StatRecord;

/// Draws a strike magnitude around a computed power value.
///
/// The magnitude is uniform over `[power - below·X, power + above·X]`
/// (X being the attacker's spread stat), floored to an integer. The
/// result may be negative or zero; [`apply_strike`] treats those as
/// whiffs.
pub fn draw_strike(
    power: f64,
    spread_stat: i32,
    spread: &StrikeSpread,
    rng: &mut dyn RandomSource,
) -> i32 {
    let min = power - spread.below * spread_stat as f64;
    let max = power + spread.above * spread_stat as f64;
    let drawn = min + rng.next_f64() * (max - min);
    drawn.floor() as i32
}

/// Applies a strike to a target record and returns the magnitude applied
/// (0 for a non-positive strike, which leaves the target untouched).
///
/// Armor absorbs damage first, fully, before vitality is touched; when
/// the strike meets or exceeds the armor, the armor is zeroed and the
/// overflow carries into vitality in the same blow. Armor never goes
/// negative.
pub fn apply_strike(target: &mut StatRecord, strike_value: i32) -> i32 {
    if strike_value <= 0 {
        return 0;
    }
    if strike_value < target.armor {
        target.armor -= strike_value;
    } else {
        let overflow = strike_value - target.armor;
        target.vitality = target.vitality.saturating_sub(overflow);
        target.armor = 0;
    }
    strike_value
}
