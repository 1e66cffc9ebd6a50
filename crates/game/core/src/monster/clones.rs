//! Clone arena backing deathrattle resurrection.
//!
//! Clone-bearing variants (Doppelganger, Ochre) own a flat, ordered
//! arena of clone records rather than nested monster instances: clones
//! never own sub-clones, so resurrection is a pop-from-front and power
//! or rest aggregation is a fold over the entries.

use crate::stats::{FamilyStats, StatRecord};

/// Error signalled when an Ochre cannot split any further.
///
/// Recoverable by contract: the armory loop stops spawning clones for
/// that call and nothing propagates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("volume is already at the minimum and cannot be split")]
    CannotSplit,
}

/// A stored clone: a full stat bundle of the same variant as its root,
/// without an arena of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloneRecord {
    pub record: StatRecord,
    pub family: FamilyStats,
}

/// Ordered clone storage, consumed front-first on resurrection.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloneArena {
    entries: Vec<CloneRecord>,
}

impl CloneArena {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a clone created during armory equipping.
    pub fn push(&mut self, clone: CloneRecord) {
        self.entries.push(clone);
    }

    /// Removes and returns the oldest clone (FIFO), if any.
    pub fn pop_front(&mut self) -> Option<CloneRecord> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CloneRecord> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CloneRecord> {
        self.entries.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::FamilyStats;

    fn clone_with_armor(armor: i32) -> CloneRecord {
        CloneRecord {
            record: StatRecord::new(armor, 0, 0.0),
            family: FamilyStats::Ooze {
                volume: 1,
                acidity: 0,
            },
        }
    }

    #[test]
    fn arena_pops_oldest_first() {
        let mut arena = CloneArena::new();
        arena.push(clone_with_armor(1));
        arena.push(clone_with_armor(2));
        assert_eq!(arena.pop_front().unwrap().record.armor, 1);
        assert_eq!(arena.pop_front().unwrap().record.armor, 2);
        assert!(arena.pop_front().is_none());
    }
}
