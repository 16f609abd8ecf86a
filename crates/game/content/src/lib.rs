//! Data-driven combat content and its loaders.
//!
//! This crate turns data files into validated core values:
//! - Combat rules (TOML) into [`battler_core::CombatConfig`]
//! - Rosters of heroes and monsters (RON) into [`battler_core::AnyCombatant`]
//!
//! Content never reaches the resolver unvalidated; every combatant is built
//! through the core constructors.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CombatantSpec, ConfigLoader, LoadResult, Roster, RosterLoader};
