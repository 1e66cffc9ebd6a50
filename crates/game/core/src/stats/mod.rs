//! Stat records shared by all monster variants.
//!
//! Every combatant owns exactly one [`StatRecord`] (armor, vitality,
//! speed, poison flag) plus one [`FamilyStats`] extension carrying the
//! stats specific to its family: intelligence and a weapon for
//! Humanoids, volume and acidity for Oozes. Nothing here is shared
//! between instances; clones carry their own copies.

mod family;
mod record;

pub use family::{Family, FamilyStats, Weapon};
pub use record::StatRecord;
