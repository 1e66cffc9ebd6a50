//! The closed set of monster variants.

use crate::stats::Family;

/// Discriminant selecting a variant's formula-table entry.
///
/// The variant set is fixed: each kind is a bundle of formula constants
/// in [`super::tables`], and only a monster's numeric inputs ever change
/// at runtime, never which formulas it uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum MonsterKind {
    /// Humanoid bruiser with a 40% critical-hit chance.
    Bandit,
    /// Humanoid shapeshifter that fights alongside duplicated clones.
    Doppelganger,
    /// Ooze with a near-always ×100 power amplifier and strong corrosion.
    Jubilex,
    /// Ooze that splits into half-volume clones and corrodes in chorus.
    Ochre,
}

impl MonsterKind {
    /// The stat family this variant extends.
    pub const fn family(self) -> Family {
        match self {
            Self::Bandit | Self::Doppelganger => Family::Humanoid,
            Self::Jubilex | Self::Ochre => Family::Ooze,
        }
    }

    /// Whether this variant keeps a clone arena for deathrattle.
    pub const fn has_clones(self) -> bool {
        matches!(self, Self::Doppelganger | Self::Ochre)
    }
}
