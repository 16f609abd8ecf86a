//! Stat profiles and the per-combatant statistics ledger.
//!
//! ```text
//! [ CombatantStats ]  validated once, read by the resolver
//!        ↓
//! [ AttackResolver ]  rolls swings, applies damage
//!        ↓
//! [ CombatStatistics ] counters owned by each combatant
//! ```

pub mod error;
pub mod profile;
pub mod statistics;

pub use error::ConfigurationError;
pub use profile::CombatantStats;
pub use statistics::{CombatStatistics, StatisticsReport};
