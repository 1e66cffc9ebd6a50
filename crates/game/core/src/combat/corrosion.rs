//! Corrosion outcome reported back to the engine.

/// What an Ooze's successful corrosion did to the target.
///
/// Corrosion strips armor outright when there is any, bypassing the
/// normal strike absorption; against a bare target it applies poison
/// instead, a sticky status with no mechanical effect beyond being
/// reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrosionOutcome {
    /// Target armor was zeroed immediately.
    ArmorStripped,
    /// Target had no armor and was poisoned.
    Poisoned,
}
