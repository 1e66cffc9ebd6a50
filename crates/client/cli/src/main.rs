//! Command-line duel runner.
//!
//! Builds two monsters from the arguments, optionally sends them
//! through the armory, prints betting odds on request, and runs the
//! showdown with a console reporter attached.

mod report;

use anyhow::{Context, Result, bail};
use clap::Parser;
use showdown_core::{
    Family, Monster, MonsterKind, SeededRandom, Weapon, armory, calculate_betting_odds, showdown,
};

use report::ConsoleReporter;

#[derive(Debug, Parser)]
#[command(name = "showdown", about = "Pits two dungeon monsters against each other")]
struct Args {
    /// Left-side monster kind: bandit, doppelganger, jubilex or ochre.
    #[arg(long, default_value = "bandit")]
    left: MonsterKind,

    /// Right-side monster kind.
    #[arg(long, default_value = "jubilex")]
    right: MonsterKind,

    /// Left-side stats. Humanoids take
    /// `armor,vitality,speed,intelligence[,weapon]`, Oozes take
    /// `armor,vitality,speed,volume,acidity`. Defaults to all zeroes.
    #[arg(long)]
    left_stats: Option<String>,

    /// Right-side stats, same format as --left-stats.
    #[arg(long)]
    right_stats: Option<String>,

    /// Seed for the random source; omit for a fresh fight every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Print betting odds on the left side before the fight.
    #[arg(long)]
    bets: bool,

    /// Skip the armory visit that normally precedes the fight.
    #[arg(long)]
    skip_armory: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut left = build_monster(args.left, args.left_stats.as_deref())
        .context("invalid --left-stats")?;
    let mut right = build_monster(args.right, args.right_stats.as_deref())
        .context("invalid --right-stats")?;

    let mut rng = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random source");
            SeededRandom::from_seed(seed)
        }
        None => SeededRandom::from_entropy(),
    };

    if !args.skip_armory {
        armory(&mut left, &mut rng);
        armory(&mut right, &mut rng);
        tracing::debug!(left = %left.kind(), right = %right.kind(), "armory applied");
    }

    if args.bets {
        let odds = calculate_betting_odds(&left, &right, &mut rng);
        println!("Betting odds on the {}: {odds:.2}", left.kind());
        println!();
    }

    let mut reporter = ConsoleReporter::default();
    let outcome = showdown(&mut left, &mut right, &mut rng, &mut reporter);
    tracing::info!(%outcome, "showdown finished");
    Ok(())
}

/// Builds a monster from a kind and an optional comma-separated stat
/// tuple matching its family.
fn build_monster(kind: MonsterKind, stats: Option<&str>) -> Result<Monster> {
    let Some(stats) = stats else {
        return Ok(Monster::new(kind));
    };
    let fields: Vec<&str> = stats.split(',').map(str::trim).collect();

    let armor = parse_field::<i32>(&fields, 0, "armor")?;
    let vitality = parse_field::<i32>(&fields, 1, "vitality")?;
    let speed = parse_field::<f64>(&fields, 2, "speed")?;

    match kind.family() {
        Family::Humanoid => {
            if fields.len() > 5 {
                bail!("expected at most 5 fields for a humanoid, got {}", fields.len());
            }
            let intelligence = parse_field::<i32>(&fields, 3, "intelligence")?;
            let weapon = match fields.get(4) {
                Some(name) => Some(
                    name.parse::<Weapon>()
                        .map_err(|_| anyhow::anyhow!("unknown weapon {name:?}"))?,
                ),
                None => None,
            };
            Ok(match kind {
                MonsterKind::Bandit => Monster::bandit(armor, vitality, speed, intelligence, weapon),
                _ => Monster::doppelganger(armor, vitality, speed, intelligence, weapon),
            })
        }
        Family::Ooze => {
            if fields.len() != 5 {
                bail!("expected 5 fields for an ooze, got {}", fields.len());
            }
            let volume = parse_field::<i32>(&fields, 3, "volume")?;
            let acidity = parse_field::<i32>(&fields, 4, "acidity")?;
            Ok(match kind {
                MonsterKind::Jubilex => Monster::jubilex(armor, vitality, speed, volume, acidity),
                _ => Monster::ochre(armor, vitality, speed, volume, acidity),
            })
        }
    }
}

fn parse_field<T>(fields: &[&str], index: usize, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = fields
        .get(index)
        .with_context(|| format!("missing {name} field"))?;
    raw.parse::<T>()
        .with_context(|| format!("bad {name} value {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanoid_stats_parse_with_optional_weapon() {
        let armed = build_monster(MonsterKind::Bandit, Some("10,40,2.5,8,axe")).unwrap();
        assert_eq!(armed.armor(), 10);
        assert_eq!(armed.vitality(), 40);
        assert_eq!(armed.weapon(), Some(Weapon::Axe));

        let bare = build_monster(MonsterKind::Doppelganger, Some("1,2,3.0,4")).unwrap();
        assert_eq!(bare.weapon(), None);
    }

    #[test]
    fn ooze_stats_require_all_five_fields() {
        let jubilex = build_monster(MonsterKind::Jubilex, Some("0,1,0.0,1,0")).unwrap();
        assert_eq!(jubilex.vitality(), 1);
        assert!(build_monster(MonsterKind::Ochre, Some("1,2,3.0,4")).is_err());
    }

    #[test]
    fn missing_stats_build_a_zeroed_monster() {
        let monster = build_monster(MonsterKind::Ochre, None).unwrap();
        assert_eq!(monster.armor(), 0);
        assert_eq!(monster.vitality(), 0);
    }

    #[test]
    fn junk_fields_are_rejected() {
        assert!(build_monster(MonsterKind::Bandit, Some("x,2,3.0,4")).is_err());
        assert!(build_monster(MonsterKind::Bandit, Some("1,2,3.0,4,club")).is_err());
    }
}
