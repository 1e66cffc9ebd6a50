//! Family-specific stat extensions.

/// The two stat families a monster variant can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Intelligence-and-weapon fighters (Bandit, Doppelganger).
    Humanoid,
    /// Volume-and-acidity fighters (Jubilex, Ochre).
    Ooze,
}

/// The closed set of weapons across all Humanoid variants.
///
/// A variant only ever equips from its own fixed list (see
/// [`crate::monster::tables::weapon_choices`]), but the type is shared
/// so a foreign weapon simply computes zero power instead of failing.
/// `Stick` is the placeholder weapon: always available, always worthless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Weapon {
    Axe,
    Crossbow,
    Shield,
    Staff,
    Dagger,
    Rapier,
    Stick,
}

/// Stats specific to a monster's family.
///
/// Owned alongside the [`super::StatRecord`]; replaced wholesale when a
/// deathrattle resurrection substitutes a clone's state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FamilyStats {
    Humanoid {
        intelligence: i32,
        /// `None` means unarmed: every power formula yields zero.
        weapon: Option<Weapon>,
    },
    Ooze {
        volume: i32,
        acidity: i32,
    },
}

impl FamilyStats {
    /// Which family this extension belongs to.
    pub const fn family(&self) -> Family {
        match self {
            Self::Humanoid { .. } => Family::Humanoid,
            Self::Ooze { .. } => Family::Ooze,
        }
    }

    /// The stat that widens the strike spread: intelligence for
    /// Humanoids, volume for Oozes.
    pub const fn spread_stat(&self) -> i32 {
        match *self {
            Self::Humanoid { intelligence, .. } => intelligence,
            Self::Ooze { volume, .. } => volume,
        }
    }
}
