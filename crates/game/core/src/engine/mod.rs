//! Showdown engine.
//!
//! Drives two monsters through the fixed round loop until one side (or
//! both) is out of vitality, narrating through an [`EventSink`]. The
//! engine owns no monster state and does no formatting; all randomness
//! flows through the injected [`RandomSource`].

mod events;
mod odds;

pub use events::{CombatEvent, EventSink, MonsterSnapshot, NullSink, Outcome, Side};
pub use odds::calculate_betting_odds;

use crate::env::RandomSource;
use crate::monster::Monster;

/// One armory visit: the monster equips and self-buffs.
pub fn armory(monster: &mut Monster, rng: &mut dyn RandomSource) {
    monster.apply_armory_effect(rng);
}

/// Runs a full showdown between two monsters and returns the outcome.
///
/// Each round, while both sides have strictly positive vitality:
/// 1. both special abilities resolve, left first;
/// 2. left attacks right, then right attacks left, regardless of speed;
/// 3. any side at or below zero vitality attempts its deathrattle;
/// 4. any side with positive vitality rests.
///
/// The loop checks raw vitality, not [`Monster::is_alive`], so a side
/// can terminate the fight at zero vitality while still holding unused
/// clones. Terminal classification: both at exactly zero is a
/// [`Outcome::Tie`]; otherwise the side with strictly greater vitality
/// wins, the right side taking any remaining equality.
pub fn showdown(
    left: &mut Monster,
    right: &mut Monster,
    rng: &mut dyn RandomSource,
    sink: &mut dyn EventSink,
) -> Outcome {
    // Round numbering starts at 0 in the printed report.
    let mut round: u32 = 0;
    while left.vitality() > 0 && right.vitality() > 0 {
        sink.record(CombatEvent::RoundStarted {
            round,
            left: MonsterSnapshot::of(left),
            right: MonsterSnapshot::of(right),
        });

        resolve_special(left, right, Side::Right, rng, sink);
        resolve_special(right, left, Side::Left, rng, sink);

        let strike = left.attack(right, rng);
        sink.record(CombatEvent::Attack {
            attacker: Side::Left,
            strike,
        });
        let strike = right.attack(left, rng);
        sink.record(CombatEvent::Attack {
            attacker: Side::Right,
            strike,
        });

        resolve_deathrattle(left, Side::Left, sink);
        resolve_deathrattle(right, Side::Right, sink);

        if left.vitality() > 0 {
            left.rest();
        }
        if right.vitality() > 0 {
            right.rest();
        }
        round += 1;
    }

    let outcome = classify(left.vitality(), right.vitality());
    sink.record(CombatEvent::Finished {
        outcome,
        left: MonsterSnapshot::of(left),
        right: MonsterSnapshot::of(right),
        any_poisoned: left.is_poisoned() || right.is_poisoned(),
    });
    outcome
}

fn resolve_special(
    actor: &Monster,
    target: &mut Monster,
    target_side: Side,
    rng: &mut dyn RandomSource,
    sink: &mut dyn EventSink,
) {
    use crate::combat::CorrosionOutcome;

    match actor.perform_special_ability(target, rng) {
        Some(CorrosionOutcome::ArmorStripped) => sink.record(CombatEvent::ArmorCorroded {
            target: target_side,
        }),
        Some(CorrosionOutcome::Poisoned) => sink.record(CombatEvent::Poisoned {
            target: target_side,
        }),
        None => {}
    }
}

fn resolve_deathrattle(monster: &mut Monster, side: Side, sink: &mut dyn EventSink) {
    if monster.vitality() > 0 {
        return;
    }
    if monster.handle_deathrattle() {
        sink.record(CombatEvent::Resurrected { side });
    } else {
        sink.record(CombatEvent::ClonelessDeath { side });
    }
}

fn classify(left_vitality: i32, right_vitality: i32) -> Outcome {
    if left_vitality == 0 && right_vitality == 0 {
        Outcome::Tie
    } else if left_vitality > right_vitality {
        Outcome::Monster1Wins
    } else {
        Outcome::Monster2Wins
    }
}
