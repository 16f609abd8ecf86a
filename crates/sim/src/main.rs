//! Combat odds simulator.
//!
//! Loads a roster and optional combat rules, estimates win odds for one
//! matchup over many seeded duels, and narrates a sample duel.
//!
//! ```bash
//! BATTLER_ROSTER=crates/sim/data/roster.ron \
//! BATTLER_RULES=crates/sim/data/rules.toml \
//! RUST_LOG=battler_core=debug \
//!     cargo run -p battler-sim
//! ```
mod config;
mod narration;
mod report;

use anyhow::Result;
use battler_content::{ConfigLoader, RosterLoader};
use battler_core::CombatConfig;

use crate::config::{OutputFormat, SimConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env()?;

    let rules = match &config.rules_path {
        Some(path) => ConfigLoader::load(path)?,
        None => CombatConfig::default(),
    };
    let roster = RosterLoader::load(&config.roster_path)?;
    tracing::info!(
        roster = %config.roster_path.display(),
        combatants = roster.len(),
        roll_policy = %rules.roll_policy,
        "content loaded"
    );

    let report = report::run(&config, rules, &roster)?;

    match config.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
