//! Attack action orchestration.
//!
//! One [`AttackResolver::attack`] call resolves every swing of one attacker
//! against one defender:
//!
//! 1. Range gate: out of range is a no-op (no draws, no mutation)
//! 2. `attacks_per_turn` outcome rolls
//! 3. One fresh base-damage roll per Hit or Critical, in swing order
//! 4. Damage applied to the defender, both ledgers updated
//!
//! Every draw happens before anything is written, so an RNG failure leaves both
//! combatants exactly as they were.

use crate::combatant::Combatant;
use crate::config::CombatConfig;
use crate::env::{RngError, RngSource};

use super::damage::{base_damage, critical_damage, hit_damage};
use super::facing::facing_of;
use super::hit::RollThresholds;
use super::result::{AttackOutcome, AttackResult, Swing};

/// Whether `attacker` can reach `defender` this action.
pub fn in_range<A, D>(attacker: &A, defender: &D) -> bool
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    attacker.position().center_distance(defender.position()) <= attacker.range()
}

/// A combatant with lethal damage cannot initiate further attacks.
pub fn is_ready_to_attack<C: Combatant + ?Sized>(combatant: &C) -> bool {
    combatant.is_alive_for_attack()
}

/// Resolves attack actions under one [`CombatConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackResolver {
    config: CombatConfig,
}

impl AttackResolver {
    pub fn new(config: CombatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Resolve a full attack action of `attacker` against `defender`.
    ///
    /// Draws exactly `attacks_per_turn` outcome rolls plus one damage roll per
    /// Hit or Critical. Only the defender's damage and both statistics
    /// ledgers are mutated.
    pub fn attack<A, D, R>(
        &self,
        attacker: &mut A,
        defender: &mut D,
        rng: &mut R,
    ) -> Result<AttackResult, RngError>
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
        R: RngSource + ?Sized,
    {
        if !in_range(attacker, defender) {
            tracing::debug!(
                attacker = attacker.name(),
                defender = defender.name(),
                distance = attacker.position().center_distance(defender.position()),
                range = attacker.range(),
                "attack out of range"
            );
            return Ok(AttackResult::out_of_range());
        }

        let result = self.resolve(&*attacker, &*defender, rng)?;

        for swing in &result.details {
            if swing.damage > 0 {
                defender.apply_damage(swing.damage);
            }
        }
        attacker.statistics_mut().record_attack(&result);
        defender.statistics_mut().record_defense(&result);

        tracing::debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            swings = result.swings,
            hits = result.hits,
            misses = result.misses,
            dodges = result.dodges,
            criticals = result.criticals,
            damage = result.total_damage(),
            "attack resolved"
        );

        Ok(result)
    }

    /// Roll every swing and its damage without touching either combatant.
    fn resolve<A, D, R>(
        &self,
        attacker: &A,
        defender: &D,
        rng: &mut R,
    ) -> Result<AttackResult, RngError>
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
        R: RngSource + ?Sized,
    {
        let thresholds = RollThresholds::between(attacker, defender);
        let swings = attacker.attacks_per_turn();

        let mut details = Vec::with_capacity(swings as usize);
        for _ in 0..swings {
            let roll = thresholds.roll(rng)?;
            let outcome = thresholds.decide(roll, self.config.roll_policy);
            details.push(Swing {
                roll,
                outcome,
                damage: 0,
            });
        }

        let mut result = AttackResult {
            in_range: true,
            swings,
            facing: Some(facing_of(attacker, defender)),
            ..AttackResult::out_of_range()
        };

        for swing in &mut details {
            match swing.outcome {
                AttackOutcome::Hit => {
                    let base = base_damage(attacker, defender, rng)?;
                    swing.damage = hit_damage(defender, base).max(0) as u32;
                    result.hits += 1;
                    result.hit_damage += u64::from(swing.damage);
                }
                AttackOutcome::Critical => {
                    let base = base_damage(attacker, defender, rng)?;
                    swing.damage = critical_damage(attacker, defender, base).max(0) as u32;
                    result.criticals += 1;
                    result.critical_damage += u64::from(swing.damage);
                }
                AttackOutcome::Miss => result.misses += 1,
                AttackOutcome::Dodge => result.dodges += 1,
            }
            tracing::trace!(
                roll = swing.roll,
                outcome = %swing.outcome,
                damage = swing.damage,
                "swing"
            );
        }

        result.details = details;
        Ok(result)
    }
}
