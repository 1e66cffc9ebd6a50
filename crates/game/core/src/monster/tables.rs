//! Per-variant formula tables.
//!
//! Every balance constant in the combat rules lives here, one entry per
//! variant, selected by [`MonsterKind`]. The asymmetries are intentional
//! and preserved from the source rules, most visibly the critical-hit
//! rows: Bandit doubles its power 40% of the time while Jubilex
//! multiplies by 100 on 99% of rolls.

use crate::stats::{Family, Weapon};

use super::MonsterKind;

/// Weighted linear combination defining a Humanoid's base power while a
/// given weapon is equipped. Weights may be negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponWeights {
    pub armor: f64,
    pub vitality: f64,
    pub speed: f64,
    pub intelligence: f64,
}

impl WeaponWeights {
    pub const ZERO: Self = Self {
        armor: 0.0,
        vitality: 0.0,
        speed: 0.0,
        intelligence: 0.0,
    };
}

/// Weighted linear combination defining an Ooze's base power.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OozeWeights {
    pub vitality: f64,
    pub volume: f64,
    pub acidity: f64,
}

/// Critical-hit roll: the base power is multiplied by `multiplier` when
/// the draw exceeds `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CritRoll {
    pub threshold: f64,
    pub multiplier: f64,
}

/// Strike spread: the strike magnitude is drawn uniformly from
/// `[power - below * X, power + above * X]` where `X` is the variant's
/// spread stat (intelligence for Humanoids, volume for Oozes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrikeSpread {
    pub below: f64,
    pub above: f64,
}

/// Which stat a variant recovers when resting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestStat {
    Vitality,
    Armor,
}

/// One formula-table entry: everything variant-specific that is not a
/// weapon weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantProfile {
    pub family: Family,
    /// Stat restored by `rest()`; clone-bearing variants rest their
    /// clones with the same boost.
    pub rest_stat: RestStat,
    pub rest_gain: i32,
    pub crit: Option<CritRoll>,
    pub spread: StrikeSpread,
}

const BANDIT: VariantProfile = VariantProfile {
    family: Family::Humanoid,
    rest_stat: RestStat::Vitality,
    rest_gain: 30,
    crit: Some(CritRoll {
        threshold: 0.6,
        multiplier: 2.0,
    }),
    spread: StrikeSpread {
        below: 0.15,
        above: 0.25,
    },
};

const DOPPELGANGER: VariantProfile = VariantProfile {
    family: Family::Humanoid,
    rest_stat: RestStat::Vitality,
    rest_gain: 10,
    crit: None,
    spread: StrikeSpread {
        below: 0.5,
        above: 0.5,
    },
};

const JUBILEX: VariantProfile = VariantProfile {
    family: Family::Ooze,
    rest_stat: RestStat::Armor,
    rest_gain: 10_000,
    crit: Some(CritRoll {
        threshold: 0.01,
        multiplier: 100.0,
    }),
    spread: StrikeSpread {
        below: 0.005,
        above: 0.5,
    },
};

const OCHRE: VariantProfile = VariantProfile {
    family: Family::Ooze,
    rest_stat: RestStat::Armor,
    rest_gain: 20,
    crit: None,
    spread: StrikeSpread {
        below: 0.5,
        above: 0.5,
    },
};

/// Returns the formula-table entry for a variant.
pub const fn profile(kind: MonsterKind) -> &'static VariantProfile {
    match kind {
        MonsterKind::Bandit => &BANDIT,
        MonsterKind::Doppelganger => &DOPPELGANGER,
        MonsterKind::Jubilex => &JUBILEX,
        MonsterKind::Ochre => &OCHRE,
    }
}

/// The fixed armory list a Humanoid variant equips from (uniform draw).
/// Empty for Oozes, which carry no weapons.
pub const fn weapon_choices(kind: MonsterKind) -> &'static [Weapon] {
    match kind {
        MonsterKind::Bandit => &[Weapon::Axe, Weapon::Crossbow, Weapon::Shield, Weapon::Stick],
        MonsterKind::Doppelganger => {
            &[Weapon::Staff, Weapon::Dagger, Weapon::Rapier, Weapon::Stick]
        }
        MonsterKind::Jubilex | MonsterKind::Ochre => &[],
    }
}

/// Power weights for a variant/weapon pair.
///
/// Any pairing outside the variant's own armory (including `Stick`, the
/// placeholder) computes zero power ("no weapon, no power").
pub const fn weapon_weights(kind: MonsterKind, weapon: Weapon) -> WeaponWeights {
    match (kind, weapon) {
        (MonsterKind::Bandit, Weapon::Axe) => WeaponWeights {
            armor: 0.0,
            vitality: 0.65,
            speed: -0.1,
            intelligence: 0.35,
        },
        (MonsterKind::Bandit, Weapon::Crossbow) => WeaponWeights {
            armor: 0.0,
            vitality: 0.25,
            speed: 0.25,
            intelligence: 0.5,
        },
        (MonsterKind::Bandit, Weapon::Shield) => WeaponWeights {
            armor: 0.7,
            vitality: 0.2,
            speed: 0.1,
            intelligence: -0.2,
        },
        (MonsterKind::Doppelganger, Weapon::Staff) => WeaponWeights {
            armor: 0.0,
            vitality: 0.35,
            speed: -0.6,
            intelligence: 0.3,
        },
        (MonsterKind::Doppelganger, Weapon::Dagger) => WeaponWeights {
            armor: 0.0,
            vitality: 0.05,
            speed: 0.8,
            intelligence: 0.15,
        },
        (MonsterKind::Doppelganger, Weapon::Rapier) => WeaponWeights {
            armor: 0.4,
            vitality: 0.0,
            speed: 0.5,
            intelligence: 0.2,
        },
        _ => WeaponWeights::ZERO,
    }
}

/// Ooze base-power weights. Zero for Humanoid kinds, which never use
/// this table.
pub const fn ooze_weights(kind: MonsterKind) -> OozeWeights {
    match kind {
        MonsterKind::Jubilex => OozeWeights {
            vitality: 70.0,
            volume: 350.0,
            acidity: 100.0,
        },
        MonsterKind::Ochre => OozeWeights {
            vitality: 0.7,
            volume: 0.35,
            acidity: 1.0,
        },
        MonsterKind::Bandit | MonsterKind::Doppelganger => OozeWeights {
            vitality: 0.0,
            volume: 0.0,
            acidity: 0.0,
        },
    }
}

/// Upper bound (exclusive) on the clone-count draw: armory equipping
/// spawns `floor(draw * CLONE_ROLL_RANGE)` clones, i.e. 0 to 5.
pub const CLONE_ROLL_RANGE: f64 = 6.0;

/// Jubilex corrosion succeeds iff the draw is at most this bound (95%).
pub const JUBILEX_CORRODE_BOUND: f64 = 0.95;

/// Ochre corrosion succeeds iff the draw is strictly below this chance
/// (9.5%), checked on self first and then once per clone in arena order.
pub const OCHRE_CORRODE_CHANCE: f64 = 0.095;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stick_is_always_worthless() {
        for kind in [MonsterKind::Bandit, MonsterKind::Doppelganger] {
            assert_eq!(weapon_weights(kind, Weapon::Stick), WeaponWeights::ZERO);
        }
    }

    #[test]
    fn foreign_weapons_yield_zero_weights() {
        // A Bandit holding a Doppelganger weapon computes zero power.
        assert_eq!(
            weapon_weights(MonsterKind::Bandit, Weapon::Rapier),
            WeaponWeights::ZERO
        );
        assert_eq!(
            weapon_weights(MonsterKind::Doppelganger, Weapon::Axe),
            WeaponWeights::ZERO
        );
    }

    #[test]
    fn every_humanoid_armory_ends_with_the_stick() {
        for kind in [MonsterKind::Bandit, MonsterKind::Doppelganger] {
            let choices = weapon_choices(kind);
            assert_eq!(choices.len(), 4);
            assert_eq!(*choices.last().unwrap(), Weapon::Stick);
        }
    }

    #[test]
    fn oozes_have_no_armory_weapons() {
        assert!(weapon_choices(MonsterKind::Jubilex).is_empty());
        assert!(weapon_choices(MonsterKind::Ochre).is_empty());
    }

    #[test]
    fn crit_rows_keep_the_source_asymmetry() {
        let bandit = profile(MonsterKind::Bandit).crit.unwrap();
        let jubilex = profile(MonsterKind::Jubilex).crit.unwrap();
        assert_eq!(bandit.threshold, 0.6);
        assert_eq!(bandit.multiplier, 2.0);
        assert_eq!(jubilex.threshold, 0.01);
        assert_eq!(jubilex.multiplier, 100.0);
        assert!(profile(MonsterKind::Doppelganger).crit.is_none());
        assert!(profile(MonsterKind::Ochre).crit.is_none());
    }
}
