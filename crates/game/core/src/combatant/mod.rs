//! Combatant capability contract and its concrete variants.
//!
//! The resolver only ever sees [`Combatant`]. Variants differ in identity and
//! narration, never in mechanics:
//!
//! - [`Hero`]: a named player character
//! - [`Monster`]: an enemy, usually generic ("the goblin")
//! - [`AnyCombatant`]: closed sum of both for data-driven rosters

mod actor;
mod variants;

pub use actor::ActorState;
pub use variants::{AnyCombatant, CombatantKind, Hero, Monster};

use crate::state::{BoundingBox, Direction};
use crate::stats::{CombatStatistics, CombatantStats};

/// Capability set the attack resolver works against.
///
/// Implementors expose their stat profile, accumulated damage, placement and
/// statistics ledger; every individual stat accessor has a default that reads
/// through [`Combatant::stats`].
pub trait Combatant {
    fn name(&self) -> &str;

    /// Generic combatants are narrated with an article ("the goblin").
    fn is_generic(&self) -> bool;

    fn stats(&self) -> &CombatantStats;

    fn damage_taken(&self) -> u32;

    /// Add `amount` to the accumulated damage. No health cap is enforced.
    fn apply_damage(&mut self, amount: u32);

    fn position(&self) -> &BoundingBox;

    fn facing_direction(&self) -> Direction;

    fn statistics(&self) -> &CombatStatistics;

    fn statistics_mut(&mut self) -> &mut CombatStatistics;

    /// Independent copy with identical stats and a zeroed statistics ledger.
    ///
    /// Used to run what-if simulations without touching the canonical
    /// combatant.
    fn snapshot_copy(&self) -> Self
    where
        Self: Sized;

    // ===== stat accessors =====

    fn health(&self) -> i32 {
        self.stats().health
    }

    fn attacks_per_turn(&self) -> u32 {
        self.stats().attacks_per_turn
    }

    fn range(&self) -> f64 {
        self.stats().range
    }

    fn power(&self) -> i32 {
        self.stats().power
    }

    fn defense(&self) -> i32 {
        self.stats().defense
    }

    fn accuracy(&self) -> i32 {
        self.stats().accuracy
    }

    fn evasion(&self) -> i32 {
        self.stats().evasion
    }

    fn miss_chance(&self) -> i32 {
        self.stats().miss_chance
    }

    fn critical_rate(&self) -> i32 {
        self.stats().critical_rate
    }

    fn critical_multiplier(&self) -> f64 {
        self.stats().critical_multiplier
    }

    fn luck(&self) -> i32 {
        self.stats().luck
    }

    /// True while accumulated damage is below health.
    fn is_alive_for_attack(&self) -> bool {
        i64::from(self.damage_taken()) < i64::from(self.health())
    }

    /// Health left before the combatant stops attacking (never negative).
    fn remaining_health(&self) -> i64 {
        (i64::from(self.health()) - i64::from(self.damage_taken())).max(0)
    }
}
