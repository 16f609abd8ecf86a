//! Per-swing outcome roll.
//!
//! # Formula
//!
//! ```text
//! to_critical = 100 - attacker.critical_rate
//! to_hit      = 100 - (90 - attacker.miss_chance + attacker.accuracy)
//! to_evade    = max(0, defender.evasion - attacker.accuracy)
//! luck        = attacker.luck - defender.luck
//! roll        = 1 + curve::next_int(100, luck)        // 1..=100
//! ```

use crate::combatant::Combatant;
use crate::config::{CombatConfig, RollPolicy};
use crate::env::{RngError, RngSource};

use super::curve;
use super::result::AttackOutcome;

/// Thresholds a roll is compared against, fixed for one attacker/defender pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollThresholds {
    /// Rolls at or above this are critical hits.
    pub to_critical: i32,
    /// Rolls below this miss.
    pub to_hit: i32,
    /// Rolls at or below this are dodged.
    pub to_evade: i32,
    /// Net luck bias of the attacker over the defender.
    pub luck: i32,
}

impl RollThresholds {
    pub fn between<A, D>(attacker: &A, defender: &D) -> Self
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
    {
        // Stats are unbounded; extreme values pin thresholds to i32 limits.
        let hit_chance = CombatConfig::HIT_BASELINE
            .saturating_sub(attacker.miss_chance())
            .saturating_add(attacker.accuracy());
        Self {
            to_critical: CombatConfig::D100.saturating_sub(attacker.critical_rate()),
            to_hit: CombatConfig::D100.saturating_sub(hit_chance),
            to_evade: defender
                .evasion()
                .saturating_sub(attacker.accuracy())
                .max(0),
            luck: attacker.luck().saturating_sub(defender.luck()),
        }
    }

    /// Map a roll to an outcome under `policy`.
    pub fn decide(&self, roll: i32, policy: RollPolicy) -> AttackOutcome {
        match policy {
            RollPolicy::Prioritized => {
                if roll >= self.to_critical {
                    AttackOutcome::Critical
                } else if roll == 1 {
                    AttackOutcome::Miss
                } else if roll <= self.to_evade {
                    AttackOutcome::Dodge
                } else if roll < self.to_hit {
                    AttackOutcome::Miss
                } else {
                    AttackOutcome::Hit
                }
            }
            // Earlier checks were always overwritten by the threshold check.
            RollPolicy::Legacy => {
                if roll < self.to_hit {
                    AttackOutcome::Miss
                } else {
                    AttackOutcome::Hit
                }
            }
        }
    }

    /// Draw one d100 roll biased by the pair's luck.
    pub fn roll<R>(&self, rng: &mut R) -> Result<i32, RngError>
    where
        R: RngSource + ?Sized,
    {
        Ok(1 + curve::next_int(CombatConfig::D100, self.luck, rng)?)
    }
}

/// Roll one swing of `attacker` against `defender`.
///
/// Returns the roll together with its outcome.
pub fn roll_to_hit<A, D, R>(
    attacker: &A,
    defender: &D,
    policy: RollPolicy,
    rng: &mut R,
) -> Result<(i32, AttackOutcome), RngError>
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
    R: RngSource + ?Sized,
{
    let thresholds = RollThresholds::between(attacker, defender);
    let roll = thresholds.roll(rng)?;
    Ok((roll, thresholds.decide(roll, policy)))
}
