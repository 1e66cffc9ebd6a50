//! Console rendering of the engine's event stream.

use showdown_core::{CombatEvent, EventSink, MonsterSnapshot, Outcome};

const COLUMN_WIDTH: usize = 18;

/// Prints the round-by-round report the way the arena announcer would.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl EventSink for ConsoleReporter {
    fn record(&mut self, event: CombatEvent) {
        match event {
            CombatEvent::RoundStarted { round, left, right } => {
                println!("Round {round}:");
                print_pair(&left, &right);
            }
            CombatEvent::ArmorCorroded { target } => {
                println!("The {target} side's armor corrodes away!");
            }
            CombatEvent::Poisoned { target } => {
                println!("The {target} side is poisoned!");
            }
            CombatEvent::Attack { attacker, strike } => {
                println!("The {attacker} side does {strike} damage!");
            }
            CombatEvent::Resurrected { side } => {
                println!("The {side} side was resurrected by its deathrattle!");
            }
            CombatEvent::ClonelessDeath { side } => {
                println!("The {side} side has no clones left and is dead.");
            }
            CombatEvent::Finished {
                outcome,
                left,
                right,
                any_poisoned,
            } => {
                println!();
                print_pair(&left, &right);
                println!("------GAME OVER------");
                match outcome {
                    Outcome::Tie => println!("TIE: Both monsters died!"),
                    Outcome::Monster1Wins => println!("The left side wins!"),
                    Outcome::Monster2Wins => println!("The right side wins!"),
                }
                if any_poisoned {
                    println!("Poison lingers over the arena.");
                }
            }
        }
    }
}

fn print_pair(left: &MonsterSnapshot, right: &MonsterSnapshot) {
    let rows = [
        (format!("({})", left.kind), format!("({})", right.kind)),
        ("---------".to_string(), "---------".to_string()),
        (format!("A: {}", left.armor), format!("A: {}", right.armor)),
        (format!("V: {}", left.vitality), format!("V: {}", right.vitality)),
        (format!("S: {:.2}", left.speed), format!("S: {:.2}", right.speed)),
    ];
    for (left_cell, right_cell) in rows {
        println!("{left_cell:<width$}{right_cell}", width = COLUMN_WIDTH);
    }
    println!();
}
