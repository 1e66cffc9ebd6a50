//! The mutable numeric state every monster carries.

/// Core stat record owned by a single monster instance.
///
/// Invariants:
/// - `armor` never goes below zero; the strike absorption rule zeroes it
///   and carries the overflow into vitality in the same blow.
/// - `vitality` may go negative transiently, until the engine resolves
///   death at the end of the exchange.
/// - `speed` participates in power formulas only; it never influences
///   turn order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRecord {
    pub armor: i32,
    pub vitality: i32,
    pub speed: f64,
    pub poisoned: bool,
}

impl StatRecord {
    /// Creates a record with the given stats and no poison.
    pub const fn new(armor: i32, vitality: i32, speed: f64) -> Self {
        Self {
            armor,
            vitality,
            speed,
            poisoned: false,
        }
    }

    /// Zeroed record: the default-constructed monster state.
    pub const fn zeroed() -> Self {
        Self::new(0, 0, 0.0)
    }

    /// Average of armor, vitality, and speed, used for the betting-odds
    /// comparison between two monsters.
    pub fn rating(&self) -> f64 {
        (self.armor as f64 + self.vitality as f64 + self.speed) / 3.0
    }
}

impl Default for StatRecord {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_record_has_no_poison() {
        let record = StatRecord::zeroed();
        assert_eq!(record.armor, 0);
        assert_eq!(record.vitality, 0);
        assert_eq!(record.speed, 0.0);
        assert!(!record.poisoned);
    }

    #[test]
    fn rating_averages_all_three_stats() {
        let record = StatRecord::new(3, 6, 9.0);
        assert_eq!(record.rating(), 6.0);
    }
}
