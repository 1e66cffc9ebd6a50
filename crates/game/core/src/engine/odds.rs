//! Pre-fight betting odds.

use std::cmp::Ordering;

use crate::env::RandomSource;
use crate::monster::Monster;

/// Odds on the left monster winning, from current power and the stat
/// rating comparison.
///
/// `P = power1 / (power1 + power2)` and the returned odds are
/// `P / (1 - P)`, scaled by 0.8 when the left monster rates lower than
/// the right and by 1.2 when it rates higher. Power is re-evaluated
/// here, so variants with a crit roll consume one draw each (left
/// first) and repeated calls can disagree; callers wanting a stable
/// figure must capture one result.
pub fn calculate_betting_odds(
    left: &Monster,
    right: &Monster,
    rng: &mut dyn RandomSource,
) -> f64 {
    let power1 = left.calculate_power(rng);
    let power2 = right.calculate_power(rng);
    let probability = power1 / (power1 + power2);
    let odds = probability / (1.0 - probability);
    match left.compare(right) {
        Ordering::Less => odds * 0.8,
        Ordering::Greater => odds * 1.2,
        Ordering::Equal => odds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRandom;
    use crate::stats::Weapon;

    #[test]
    fn mirror_match_is_even_money() {
        let left = Monster::jubilex(5, 5, 5.0, 2, 2);
        let right = Monster::jubilex(5, 5, 5.0, 2, 2);
        // Both draws amplify, so the powers stay equal.
        let mut rng = ScriptedRandom::new([0.5, 0.5]);
        assert_eq!(calculate_betting_odds(&left, &right, &mut rng), 1.0);
    }

    #[test]
    fn lower_rated_left_is_discounted() {
        let left = Monster::doppelganger(0, 10, 0.0, 0, Some(Weapon::Dagger));
        let right = Monster::doppelganger(0, 30, 0.0, 0, Some(Weapon::Dagger));
        // Powers 0.5 vs 1.5: raw odds 1/3, rated lower so times 0.8.
        let mut rng = ScriptedRandom::new([]);
        let odds = calculate_betting_odds(&left, &right, &mut rng);
        assert!((odds - 0.8 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn higher_rated_left_is_boosted() {
        let left = Monster::doppelganger(0, 30, 0.0, 0, Some(Weapon::Dagger));
        let right = Monster::doppelganger(0, 10, 0.0, 0, Some(Weapon::Dagger));
        let mut rng = ScriptedRandom::new([]);
        let odds = calculate_betting_odds(&left, &right, &mut rng);
        assert!((odds - 3.6).abs() < 1e-9);
    }
}
