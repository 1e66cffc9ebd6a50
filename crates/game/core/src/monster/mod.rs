//! Monster variants and their combat operations.
//!
//! A [`Monster`] is a closed tagged-variant type: the [`MonsterKind`]
//! discriminant selects a formula-table entry in [`tables`], and only
//! the numeric inputs ever change at runtime. Clone-bearing variants
//! (Doppelganger, Ochre) additionally own a [`CloneArena`] that feeds
//! deathrattle resurrection.
//!
//! # Draw order
//!
//! Random draws are observable under a scripted source, so their order
//! is part of each operation's contract:
//!
//! - `calculate_power`: one crit draw for Bandit/Jubilex, none for
//!   Doppelganger/Ochre.
//! - `attack`: the power draws, then one spread draw.
//! - `apply_armory_effect`: Humanoids draw the weapon index first;
//!   Bandit then draws the stat-doubling index, Doppelganger the clone
//!   count. Oozes double volume without a draw; Jubilex then draws the
//!   stat-doubling index, Ochre the clone count.
//! - `perform_special_ability`: Jubilex draws once; Ochre draws for
//!   itself, then once per clone in arena order until a success.

mod clones;
mod kind;
pub mod tables;

pub use clones::{CloneArena, CloneRecord, SplitError};
pub use kind::MonsterKind;

use std::cmp::Ordering;

use crate::combat::{self, CorrosionOutcome};
use crate::env::RandomSource;
use crate::stats::{FamilyStats, StatRecord, Weapon};

use tables::{CLONE_ROLL_RANGE, JUBILEX_CORRODE_BOUND, OCHRE_CORRODE_CHANCE, RestStat};

/// A single combatant: discriminant, stat record, family extension, and
/// (for clone-bearing kinds) the clone arena.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    kind: MonsterKind,
    record: StatRecord,
    family: FamilyStats,
    clones: CloneArena,
}

impl Monster {
    /// Default-constructed monster of the given kind: all stats zeroed,
    /// unarmed, empty arena.
    pub fn new(kind: MonsterKind) -> Self {
        let family = match kind.family() {
            crate::stats::Family::Humanoid => FamilyStats::Humanoid {
                intelligence: 0,
                weapon: None,
            },
            crate::stats::Family::Ooze => FamilyStats::Ooze {
                volume: 0,
                acidity: 0,
            },
        };
        Self {
            kind,
            record: StatRecord::zeroed(),
            family,
            clones: CloneArena::new(),
        }
    }

    fn humanoid(
        kind: MonsterKind,
        armor: i32,
        vitality: i32,
        speed: f64,
        intelligence: i32,
        weapon: Option<Weapon>,
    ) -> Self {
        Self {
            kind,
            record: StatRecord::new(armor, vitality, speed),
            family: FamilyStats::Humanoid {
                intelligence,
                weapon,
            },
            clones: CloneArena::new(),
        }
    }

    fn ooze(kind: MonsterKind, armor: i32, vitality: i32, speed: f64, volume: i32, acidity: i32) -> Self {
        Self {
            kind,
            record: StatRecord::new(armor, vitality, speed),
            family: FamilyStats::Ooze { volume, acidity },
            clones: CloneArena::new(),
        }
    }

    pub fn bandit(
        armor: i32,
        vitality: i32,
        speed: f64,
        intelligence: i32,
        weapon: Option<Weapon>,
    ) -> Self {
        Self::humanoid(MonsterKind::Bandit, armor, vitality, speed, intelligence, weapon)
    }

    pub fn doppelganger(
        armor: i32,
        vitality: i32,
        speed: f64,
        intelligence: i32,
        weapon: Option<Weapon>,
    ) -> Self {
        Self::humanoid(
            MonsterKind::Doppelganger,
            armor,
            vitality,
            speed,
            intelligence,
            weapon,
        )
    }

    pub fn jubilex(armor: i32, vitality: i32, speed: f64, volume: i32, acidity: i32) -> Self {
        Self::ooze(MonsterKind::Jubilex, armor, vitality, speed, volume, acidity)
    }

    pub fn ochre(armor: i32, vitality: i32, speed: f64, volume: i32, acidity: i32) -> Self {
        Self::ooze(MonsterKind::Ochre, armor, vitality, speed, volume, acidity)
    }

    // ===== accessors =====

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    pub fn record(&self) -> &StatRecord {
        &self.record
    }

    pub fn family_stats(&self) -> &FamilyStats {
        &self.family
    }

    pub fn clones(&self) -> &CloneArena {
        &self.clones
    }

    pub fn armor(&self) -> i32 {
        self.record.armor
    }

    pub fn vitality(&self) -> i32 {
        self.record.vitality
    }

    pub fn speed(&self) -> f64 {
        self.record.speed
    }

    /// Equipped weapon, `None` for Oozes and unarmed Humanoids.
    pub fn weapon(&self) -> Option<Weapon> {
        match self.family {
            FamilyStats::Humanoid { weapon, .. } => weapon,
            FamilyStats::Ooze { .. } => None,
        }
    }

    pub fn set_vitality(&mut self, vitality: i32) {
        self.record.vitality = vitality;
    }

    pub fn is_poisoned(&self) -> bool {
        self.record.poisoned
    }

    pub fn apply_poison(&mut self) {
        self.record.poisoned = true;
    }

    pub fn clear_poison(&mut self) {
        self.record.poisoned = false;
    }

    /// Liveness including stored clones.
    ///
    /// A clone-bearing monster at or below zero vitality still counts as
    /// alive while its arena is non-empty. Note that the showdown loop
    /// deliberately does NOT consult this, it checks raw vitality,
    /// so a monster can end a fight "alive" by this measure yet defeated.
    pub fn is_alive(&self) -> bool {
        self.record.vitality > 0 || !self.clones.is_empty()
    }

    /// Orders two monsters by the average of armor, vitality, and speed.
    pub fn compare(&self, other: &Monster) -> Ordering {
        self.record
            .rating()
            .partial_cmp(&other.record.rating())
            .unwrap_or(Ordering::Equal)
    }

    // ===== combat operations =====

    /// Variant-specific recovery, applied to self and, for clone-bearing
    /// variants, every stored clone.
    pub fn rest(&mut self) {
        let profile = tables::profile(self.kind);
        boost(&mut self.record, profile.rest_stat, profile.rest_gain);
        if self.kind.has_clones() {
            for clone in self.clones.iter_mut() {
                boost(&mut clone.record, profile.rest_stat, profile.rest_gain);
            }
        }
    }

    /// Current power: the variant's weighted stat combination, folded
    /// over self plus every clone, then put through the crit roll where
    /// the variant has one.
    ///
    /// Not idempotent: Bandit and Jubilex consume a crit draw on every
    /// call, so two consecutive calls can disagree. Callers needing one
    /// consistent value must capture and reuse it.
    pub fn calculate_power(&self, rng: &mut dyn RandomSource) -> f64 {
        let mut base = base_power(self.kind, &self.record, &self.family);
        for clone in self.clones.iter() {
            base += base_power(self.kind, &clone.record, &clone.family);
        }
        match tables::profile(self.kind).crit {
            Some(crit) => combat::roll_crit(&crit, base, rng),
            None => base,
        }
    }

    /// Computes and applies one strike against `target`, returning the
    /// applied magnitude (0 for a whiff). Armor absorbs first; overflow
    /// carries into vitality in the same blow.
    pub fn attack(&self, target: &mut Monster, rng: &mut dyn RandomSource) -> i32 {
        let power = self.calculate_power(rng);
        let strike = combat::draw_strike(
            power,
            self.family.spread_stat(),
            &tables::profile(self.kind).spread,
            rng,
        );
        combat::apply_strike(&mut target.record, strike)
    }

    /// One armory visit: the variant's self-buff, possibly spawning
    /// clones. See the module doc for the draw order.
    pub fn apply_armory_effect(&mut self, rng: &mut dyn RandomSource) {
        match self.kind {
            MonsterKind::Bandit => {
                self.equip_random_weapon(rng);
                // Snapshot-then-double through f64, truncating back,
                // exactly as the source rules compute it.
                match (rng.next_f64() * 3.0) as usize {
                    0 => self.record.armor = (self.record.armor as f64 * 2.0) as i32,
                    1 => self.record.vitality = (self.record.vitality as f64 * 2.0) as i32,
                    _ => self.record.speed *= 2.0,
                }
            }
            MonsterKind::Doppelganger => {
                self.equip_random_weapon(rng);
                let count = (rng.next_f64() * CLONE_ROLL_RANGE).floor() as usize;
                for _ in 0..count {
                    let copy = self.duplicate();
                    self.clones.push(copy);
                }
            }
            MonsterKind::Jubilex => {
                self.double_volume();
                match (rng.next_f64() * 3.0) as usize {
                    0 => self.record.armor = self.record.armor.saturating_mul(2),
                    1 => self.record.vitality = self.record.vitality.saturating_mul(2),
                    _ => self.record.speed *= 2.0,
                }
            }
            MonsterKind::Ochre => {
                self.double_volume();
                let count = (rng.next_f64() * CLONE_ROLL_RANGE).floor() as usize;
                for _ in 0..count {
                    match self.split() {
                        Ok(clone) => self.clones.push(clone),
                        // Cannot split further: abandon the remaining
                        // attempts for this visit.
                        Err(SplitError::CannotSplit) => break,
                    }
                }
            }
        }
    }

    /// Deathrattle: substitute the oldest stored clone's entire stat
    /// bundle for this monster's, consuming it. Returns true iff a
    /// resurrection occurred. Fails (false, no mutation) unless vitality
    /// is at or below zero AND the arena is non-empty.
    pub fn handle_deathrattle(&mut self) -> bool {
        if self.record.vitality > 0 {
            return false;
        }
        let Some(next) = self.clones.pop_front() else {
            return false;
        };
        self.record = next.record;
        self.family = next.family;
        self.record.poisoned = false;
        true
    }

    /// Pre-exchange special ability. Humanoids have none; Oozes attempt
    /// corrosion, which strips target armor or poisons a bare target.
    /// Returns what happened so the engine can report it.
    pub fn perform_special_ability(
        &self,
        target: &mut Monster,
        rng: &mut dyn RandomSource,
    ) -> Option<CorrosionOutcome> {
        let corroded = match self.kind {
            MonsterKind::Bandit | MonsterKind::Doppelganger => return None,
            MonsterKind::Jubilex => rng.next_f64() <= JUBILEX_CORRODE_BOUND,
            MonsterKind::Ochre => {
                rng.next_f64() < OCHRE_CORRODE_CHANCE
                    || self
                        .clones
                        .iter()
                        .any(|_| rng.next_f64() < OCHRE_CORRODE_CHANCE)
            }
        };
        if !corroded {
            return None;
        }
        if target.record.armor > 0 {
            target.record.armor = 0;
            Some(CorrosionOutcome::ArmorStripped)
        } else {
            target.record.poisoned = true;
            Some(CorrosionOutcome::Poisoned)
        }
    }

    // ===== clone creation =====

    /// Doppelganger-style duplication: a clone with this monster's
    /// current stats and weapon, costing nothing. The clone has no arena
    /// of its own.
    pub fn duplicate(&self) -> CloneRecord {
        CloneRecord {
            record: StatRecord::new(self.record.armor, self.record.vitality, self.record.speed),
            family: self.family,
        }
    }

    /// Ochre-style conservative split: halves this monster's volume and
    /// returns a clone carrying the other half plus copies of the
    /// remaining stats. Fails when volume is already 1, the smallest
    /// indivisible blob, leaving both sides untouched.
    pub fn split(&mut self) -> Result<CloneRecord, SplitError> {
        let FamilyStats::Ooze { volume, acidity } = &mut self.family else {
            return Err(SplitError::CannotSplit);
        };
        if *volume == 1 {
            return Err(SplitError::CannotSplit);
        }
        let half = *volume / 2;
        *volume = half;
        Ok(CloneRecord {
            record: StatRecord::new(self.record.armor, self.record.vitality, self.record.speed),
            family: FamilyStats::Ooze {
                volume: half,
                acidity: *acidity,
            },
        })
    }

    fn equip_random_weapon(&mut self, rng: &mut dyn RandomSource) {
        let choices = tables::weapon_choices(self.kind);
        if choices.is_empty() {
            return;
        }
        let index = (rng.next_f64() * choices.len() as f64) as usize;
        if let FamilyStats::Humanoid { weapon, .. } = &mut self.family {
            *weapon = Some(choices[index]);
        }
    }

    fn double_volume(&mut self) {
        if let FamilyStats::Ooze { volume, .. } = &mut self.family {
            *volume = volume.saturating_mul(2);
        }
    }
}

fn boost(record: &mut StatRecord, stat: RestStat, gain: i32) {
    match stat {
        RestStat::Vitality => record.vitality = record.vitality.saturating_add(gain),
        RestStat::Armor => record.armor = record.armor.saturating_add(gain),
    }
}

fn base_power(kind: MonsterKind, record: &StatRecord, family: &FamilyStats) -> f64 {
    match *family {
        FamilyStats::Humanoid {
            intelligence,
            weapon,
        } => combat::humanoid_power(kind, weapon, record, intelligence),
        FamilyStats::Ooze { volume, acidity } => combat::ooze_power(kind, record, volume, acidity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRandom;
    use crate::stats::Family;

    #[test]
    fn default_monsters_are_zeroed_and_unarmed() {
        let bandit = Monster::new(MonsterKind::Bandit);
        assert_eq!(bandit.armor(), 0);
        assert_eq!(bandit.vitality(), 0);
        assert_eq!(bandit.weapon(), None);
        assert!(bandit.clones().is_empty());

        let ochre = Monster::new(MonsterKind::Ochre);
        assert_eq!(ochre.family_stats().family(), Family::Ooze);
    }

    #[test]
    fn rest_restores_the_variant_stat() {
        let mut bandit = Monster::bandit(0, 5, 0.0, 0, None);
        bandit.rest();
        assert_eq!(bandit.vitality(), 35);

        let mut jubilex = Monster::jubilex(5, 0, 0.0, 0, 0);
        jubilex.rest();
        assert_eq!(jubilex.armor(), 10_005);
    }

    #[test]
    fn clone_bearers_rest_their_clones_too() {
        let mut ochre = Monster::ochre(0, 10, 0.0, 8, 1);
        ochre.clones.push(ochre.duplicate());
        ochre.rest();
        assert_eq!(ochre.armor(), 20);
        assert_eq!(ochre.clones().iter().next().unwrap().record.armor, 20);
    }

    #[test]
    fn compare_uses_the_stat_average() {
        let weak = Monster::bandit(1, 1, 1.0, 50, None);
        let strong = Monster::jubilex(2, 2, 2.0, 0, 0);
        // Intelligence and volume are not part of the rating.
        assert_eq!(weak.compare(&strong), Ordering::Less);
        assert_eq!(strong.compare(&weak), Ordering::Greater);
        assert_eq!(weak.compare(&weak.clone()), Ordering::Equal);
    }

    #[test]
    fn bandit_crit_doubles_power() {
        let bandit = Monster::bandit(0, 100, 0.0, 0, Some(Weapon::Axe));
        let mut crit = ScriptedRandom::new([0.9]);
        let mut plain = ScriptedRandom::new([0.1]);
        assert_eq!(bandit.calculate_power(&mut crit), 130.0);
        assert_eq!(bandit.calculate_power(&mut plain), 65.0);
    }

    #[test]
    fn unarmed_bandit_still_consumes_the_crit_draw() {
        let bandit = Monster::bandit(10, 10, 10.0, 10, None);
        let mut rng = ScriptedRandom::new([0.9]);
        assert_eq!(bandit.calculate_power(&mut rng), 0.0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn jubilex_amplifier_is_nearly_always_on() {
        let jubilex = Monster::jubilex(0, 1, 0.0, 1, 0);
        let mut amplified = ScriptedRandom::new([0.5]);
        let mut dud = ScriptedRandom::new([0.005]);
        assert_eq!(jubilex.calculate_power(&mut amplified), 42_000.0);
        assert_eq!(jubilex.calculate_power(&mut dud), 420.0);
    }

    #[test]
    fn doppelganger_power_folds_over_clones() {
        let mut doppelganger = Monster::doppelganger(0, 100, 0.0, 0, Some(Weapon::Dagger));
        // Dagger: 0.05 * 100 = 5 per body.
        let mut rng = ScriptedRandom::new([]);
        assert_eq!(doppelganger.calculate_power(&mut rng), 5.0);
        doppelganger.clones.push(doppelganger.duplicate());
        doppelganger.clones.push(doppelganger.duplicate());
        assert_eq!(doppelganger.calculate_power(&mut rng), 15.0);
    }

    #[test]
    fn ochre_power_folds_over_clones() {
        let mut ochre = Monster::ochre(0, 10, 0.0, 8, 2);
        // 0.7 * 10 + 0.35 * 8 + 2 = 11.8 for the root.
        let mut rng = ScriptedRandom::new([]);
        assert!((ochre.calculate_power(&mut rng) - 11.8).abs() < 1e-9);
        let clone = ochre.split().unwrap();
        ochre.clones.push(clone);
        // Both halves now at volume 4: 2 * (7 + 1.4 + 2).
        assert!((ochre.calculate_power(&mut rng) - 20.8).abs() < 1e-9);
    }

    #[test]
    fn split_conserves_volume_for_even_blobs() {
        let mut ochre = Monster::ochre(10, 10, 1.0, 4, 4);
        let clone = ochre.split().unwrap();
        let FamilyStats::Ooze { volume, acidity } = clone.family else {
            panic!("ochre clone must stay an ooze");
        };
        assert_eq!(volume, 2);
        assert_eq!(acidity, 4);
        let FamilyStats::Ooze { volume: own, .. } = *ochre.family_stats() else {
            unreachable!();
        };
        assert_eq!(own, 2);
        assert_eq!(clone.record, StatRecord::new(10, 10, 1.0));
    }

    #[test]
    fn split_fails_at_minimum_volume_without_mutation() {
        let mut ochre = Monster::ochre(3, 3, 3.0, 1, 2);
        let before = ochre.clone();
        assert_eq!(ochre.split(), Err(SplitError::CannotSplit));
        assert_eq!(ochre, before);
    }

    #[test]
    fn duplicate_copies_stats_but_not_poison() {
        let mut doppelganger = Monster::doppelganger(1, 2, 3.0, 4, Some(Weapon::Staff));
        doppelganger.apply_poison();
        let copy = doppelganger.duplicate();
        assert_eq!(copy.record, StatRecord::new(1, 2, 3.0));
        assert!(!copy.record.poisoned);
        assert_eq!(
            copy.family,
            FamilyStats::Humanoid {
                intelligence: 4,
                weapon: Some(Weapon::Staff),
            }
        );
    }

    #[test]
    fn humanoid_armory_draws_weapon_then_doubles_a_stat() {
        let mut bandit = Monster::bandit(10, 20, 4.0, 0, None);
        // 0.3 * 4 = index 1 (Crossbow), then 0.4 * 3 = index 1 (vitality).
        let mut rng = ScriptedRandom::new([0.3, 0.4]);
        bandit.apply_armory_effect(&mut rng);
        assert_eq!(bandit.weapon(), Some(Weapon::Crossbow));
        assert_eq!(bandit.vitality(), 40);
        assert_eq!(bandit.armor(), 10);
        assert_eq!(bandit.speed(), 4.0);
    }

    #[test]
    fn jubilex_armory_doubles_volume_then_one_stat() {
        let mut jubilex = Monster::jubilex(8, 8, 8.0, 3, 3);
        // 0.9 * 3 = index 2: speed doubles.
        let mut rng = ScriptedRandom::new([0.9]);
        jubilex.apply_armory_effect(&mut rng);
        let FamilyStats::Ooze { volume, .. } = *jubilex.family_stats() else {
            unreachable!();
        };
        assert_eq!(volume, 6);
        assert_eq!(jubilex.speed(), 16.0);
        assert_eq!(jubilex.armor(), 8);
    }

    #[test]
    fn doppelganger_armory_spawns_the_rolled_clone_count() {
        let mut doppelganger = Monster::doppelganger(1, 1, 1.0, 1, None);
        // Weapon index 0 (Staff), then 0.5 * 6 = 3 clones.
        let mut rng = ScriptedRandom::new([0.0, 0.5]);
        doppelganger.apply_armory_effect(&mut rng);
        assert_eq!(doppelganger.weapon(), Some(Weapon::Staff));
        assert_eq!(doppelganger.clones().len(), 3);
        // Clones snapshot the post-equip stats.
        let first = doppelganger.clones().iter().next().unwrap();
        assert_eq!(
            first.family,
            FamilyStats::Humanoid {
                intelligence: 1,
                weapon: Some(Weapon::Staff),
            }
        );
    }

    #[test]
    fn ochre_armory_stops_spawning_once_volume_bottoms_out() {
        let mut ochre = Monster::ochre(0, 0, 0.0, 4, 0);
        // Volume doubles to 8; five attempts rolled, but splits go
        // 8 -> 4 -> 2 -> 1 and the fourth attempt aborts the loop.
        let mut rng = ScriptedRandom::new([0.99]);
        ochre.apply_armory_effect(&mut rng);
        assert_eq!(ochre.clones().len(), 3);
        let FamilyStats::Ooze { volume, .. } = *ochre.family_stats() else {
            unreachable!();
        };
        assert_eq!(volume, 1);
    }

    #[test]
    fn deathrattle_fails_without_clones_regardless_of_vitality() {
        for vitality in [-5, 0, 5] {
            let mut bandit = Monster::bandit(7, vitality, 1.0, 2, None);
            let before = bandit.clone();
            assert!(!bandit.handle_deathrattle());
            assert_eq!(bandit, before);
        }
    }

    #[test]
    fn deathrattle_fails_while_still_breathing() {
        let mut ochre = Monster::ochre(0, 5, 0.0, 8, 0);
        let clone = ochre.split().unwrap();
        ochre.clones.push(clone);
        assert!(!ochre.handle_deathrattle());
        assert_eq!(ochre.clones().len(), 1);
    }

    #[test]
    fn deathrattle_substitutes_the_oldest_clone_and_clears_poison() {
        let mut doppelganger = Monster::doppelganger(4, 9, 2.0, 6, Some(Weapon::Rapier));
        let oldest = doppelganger.duplicate();
        doppelganger.clones.push(oldest);
        doppelganger.set_vitality(3);
        doppelganger.clones.push(doppelganger.duplicate());
        doppelganger.set_vitality(-12);
        doppelganger.apply_poison();

        assert!(doppelganger.handle_deathrattle());
        // The oldest stored clone still carried vitality 9.
        assert_eq!(doppelganger.vitality(), 9);
        assert!(!doppelganger.is_poisoned());
        assert_eq!(doppelganger.clones().len(), 1);
    }

    #[test]
    fn liveness_counts_stored_clones() {
        let mut ochre = Monster::ochre(0, 0, 0.0, 8, 0);
        assert!(!ochre.is_alive());
        let clone = ochre.split().unwrap();
        ochre.clones.push(clone);
        assert!(ochre.is_alive());
    }

    #[test]
    fn humanoids_have_no_special_ability() {
        let bandit = Monster::bandit(0, 1, 0.0, 0, None);
        let mut target = Monster::jubilex(5, 5, 0.0, 1, 1);
        let mut rng = ScriptedRandom::new([]);
        assert_eq!(bandit.perform_special_ability(&mut target, &mut rng), None);
        assert_eq!(target.armor(), 5);
    }

    #[test]
    fn corrosion_strips_armor_before_it_poisons() {
        let jubilex = Monster::jubilex(0, 1, 0.0, 1, 0);
        let mut target = Monster::bandit(5, 5, 0.0, 0, None);
        let mut rng = ScriptedRandom::new([0.5, 0.5]);
        assert_eq!(
            jubilex.perform_special_ability(&mut target, &mut rng),
            Some(CorrosionOutcome::ArmorStripped)
        );
        assert_eq!(target.armor(), 0);
        assert!(!target.is_poisoned());

        // Second success against the now-bare target poisons it.
        assert_eq!(
            jubilex.perform_special_ability(&mut target, &mut rng),
            Some(CorrosionOutcome::Poisoned)
        );
        assert!(target.is_poisoned());
    }

    #[test]
    fn jubilex_corrosion_fails_above_the_bound() {
        let jubilex = Monster::jubilex(0, 1, 0.0, 1, 0);
        let mut target = Monster::bandit(5, 5, 0.0, 0, None);
        let mut rng = ScriptedRandom::new([0.96]);
        assert_eq!(jubilex.perform_special_ability(&mut target, &mut rng), None);
        assert_eq!(target.armor(), 5);
    }

    #[test]
    fn ochre_corrosion_tries_self_then_each_clone() {
        let mut ochre = Monster::ochre(0, 1, 0.0, 16, 0);
        for _ in 0..2 {
            let clone = ochre.split().unwrap();
            ochre.clones.push(clone);
        }
        let mut target = Monster::bandit(5, 5, 0.0, 0, None);
        // Self misses, first clone misses, second clone hits; the draw
        // for a third body must not happen.
        let mut rng = ScriptedRandom::new([0.5, 0.5, 0.01]);
        assert_eq!(
            ochre.perform_special_ability(&mut target, &mut rng),
            Some(CorrosionOutcome::ArmorStripped)
        );
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn attack_draws_power_then_spread() {
        let bandit = Monster::bandit(0, 100, 0.0, 20, Some(Weapon::Axe));
        let mut target = Monster::jubilex(10, 10, 0.0, 1, 1);
        // No crit (0.1), then spread draw 0.0: power 0.65*100 + 0.35*20 = 72,
        // interval [72 - 3, 72 + 5], bottom lands at 69.
        let mut rng = ScriptedRandom::new([0.1, 0.0]);
        let strike = bandit.attack(&mut target, &mut rng);
        assert_eq!(strike, 69);
        assert_eq!(target.armor(), 0);
        assert_eq!(target.vitality(), 10 - (69 - 10));
    }

    #[test]
    fn whiffed_attack_reports_zero_and_changes_nothing() {
        let bandit = Monster::bandit(0, 0, 0.0, 10, None);
        let mut target = Monster::jubilex(10, 10, 0.0, 1, 1);
        // Unarmed power 0, spread [-1.5, 2.5], bottom draw floors to -2.
        let mut rng = ScriptedRandom::new([0.1, 0.0]);
        assert_eq!(bandit.attack(&mut target, &mut rng), 0);
        assert_eq!(target.armor(), 10);
        assert_eq!(target.vitality(), 10);
    }
}
