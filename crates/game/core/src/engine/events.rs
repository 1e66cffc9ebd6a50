//! Structured combat events.
//!
//! The engine narrates a showdown by emitting [`CombatEvent`]s into an
//! [`EventSink`]; it never formats text itself. Frontends subscribe by
//! implementing the sink, tests by collecting into a `Vec`.

use crate::monster::{Monster, MonsterKind};

/// Which combatant an event concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

/// Point-in-time view of a combatant, detached from the live state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSnapshot {
    pub kind: MonsterKind,
    pub armor: i32,
    pub vitality: i32,
    pub speed: f64,
}

impl MonsterSnapshot {
    pub fn of(monster: &Monster) -> Self {
        Self {
            kind: monster.kind(),
            armor: monster.armor(),
            vitality: monster.vitality(),
            speed: monster.speed(),
        }
    }
}

/// How a showdown ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Both combatants ended at exactly zero vitality.
    Tie,
    Monster1Wins,
    Monster2Wins,
}

/// Everything observable during a showdown, in emission order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    RoundStarted {
        round: u32,
        left: MonsterSnapshot,
        right: MonsterSnapshot,
    },
    /// An Ooze's corrosion zeroed the target's armor.
    ArmorCorroded { target: Side },
    /// Corrosion found a bare target and poisoned it instead.
    Poisoned { target: Side },
    Attack { attacker: Side, strike: i32 },
    /// A downed combatant consumed a stored clone and fights on.
    Resurrected { side: Side },
    /// A downed combatant had no clone left to consume.
    ClonelessDeath { side: Side },
    Finished {
        outcome: Outcome,
        left: MonsterSnapshot,
        right: MonsterSnapshot,
        any_poisoned: bool,
    },
}

/// Receives the engine's event stream.
pub trait EventSink {
    fn record(&mut self, event: CombatEvent);
}

/// Discards everything. For callers that only want the [`Outcome`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: CombatEvent) {}
}

impl EventSink for Vec<CombatEvent> {
    fn record(&mut self, event: CombatEvent) {
        self.push(event);
    }
}
