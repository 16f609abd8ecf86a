//! Deterministic turn-based combat rules.
//!
//! `battler-core` resolves attack actions between combatants: hit, miss,
//! dodge and critical rolls, damage with luck bias, facing, and per-combatant
//! statistics. All randomness flows through an injected [`env::RngSource`], so
//! a fixed draw sequence always yields the same outcome.
//!
//! Entry point is [`combat::AttackResolver::attack`]; [`simulation`] runs
//! what-if duels on snapshot copies.
pub mod combat;
pub mod combatant;
pub mod config;
pub mod env;
pub mod error;
pub mod simulation;
pub mod state;
pub mod stats;

pub use combat::{
    AttackOutcome, AttackResolver, AttackResult, DamagePreview, Facing, Orientation,
    RollThresholds, Swing, in_range, is_ready_to_attack,
};
pub use combatant::{ActorState, AnyCombatant, Combatant, CombatantKind, Hero, Monster};
pub use config::{CombatConfig, RollPolicy};
pub use env::{PcgRng, RngError, RngSource, ScriptedRng, compute_seed};
pub use error::{CombatError, ErrorSeverity};
pub use simulation::{
    DuelOutcome, DuelSide, OddsEstimate, estimate_odds, simulate_duel, simulate_duel_observed,
};
pub use state::{BoundingBox, Direction};
pub use stats::{CombatStatistics, CombatantStats, ConfigurationError, StatisticsReport};
