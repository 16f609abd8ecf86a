//! Damage calculation.
//!
//! # Formula
//!
//! ```text
//! luck        = attacker.luck - defender.luck
//! base        = power + curve::next_int(power + 1, luck)     // [power, power * 2]
//! hit         = max(0, base - defense)
//! crit        = floor(base * critical_multiplier)
//! unblockable = crit - base
//! critical    = max(unblockable, crit - defense)
//! ```
//!
//! A critical hit never deals less than the part exceeding the base roll,
//! whatever the defender's defense.

use crate::combatant::Combatant;
use crate::env::{RngError, RngSource};

use super::curve;

#[inline]
fn net_luck<A, D>(attacker: &A, defender: &D) -> i32
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    attacker.luck().saturating_sub(defender.luck())
}

/// Roll a fresh pre-defense base damage. Consumes exactly one draw.
pub fn base_damage<A, D, R>(attacker: &A, defender: &D, rng: &mut R) -> Result<i32, RngError>
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
    R: RngSource + ?Sized,
{
    let power = attacker.power();
    let bonus = curve::next_int(power.saturating_add(1), net_luck(attacker, defender), rng)?;
    Ok(power.saturating_add(bonus))
}

pub fn base_damage_min<A: Combatant + ?Sized>(attacker: &A) -> i32 {
    attacker.power()
}

pub fn base_damage_max<A: Combatant + ?Sized>(attacker: &A) -> i32 {
    attacker.power().saturating_mul(2)
}

/// Base damage at the curve's midpoint draw. Consumes no draw.
pub fn base_damage_avg<A, D>(attacker: &A, defender: &D) -> i32
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let power = attacker.power();
    let spread = (curve::scale(0.5, net_luck(attacker, defender)) * f64::from(power)).floor();
    power.saturating_add(spread as i32)
}

/// Damage of a regular hit: base reduced by defense, floored at zero.
pub fn hit_damage<D: Combatant + ?Sized>(defender: &D, base: i32) -> i32 {
    base.saturating_sub(defender.defense()).max(0)
}

/// Damage of a critical hit.
pub fn critical_damage<A, D>(attacker: &A, defender: &D, base: i32) -> i32
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let crit = (f64::from(base) * attacker.critical_multiplier()).floor() as i32;
    let unblockable = crit.saturating_sub(base);
    unblockable.max(crit.saturating_sub(defender.defense()))
}

/// RNG-free damage envelope of `attacker` against `defender`.
///
/// Useful for pre-battle tooltips and odds displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamagePreview {
    pub base_min: i32,
    pub base_avg: i32,
    pub base_max: i32,
    pub hit_min: i32,
    pub hit_avg: i32,
    pub hit_max: i32,
    pub critical_min: i32,
    pub critical_avg: i32,
    pub critical_max: i32,
}

impl DamagePreview {
    pub fn between<A, D>(attacker: &A, defender: &D) -> Self
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
    {
        let base_min = base_damage_min(attacker);
        let base_avg = base_damage_avg(attacker, defender);
        let base_max = base_damage_max(attacker);

        Self {
            base_min,
            base_avg,
            base_max,
            hit_min: hit_damage(defender, base_min),
            hit_avg: hit_damage(defender, base_avg),
            hit_max: hit_damage(defender, base_max),
            critical_min: critical_damage(attacker, defender, base_min),
            critical_avg: critical_damage(attacker, defender, base_avg),
            critical_max: critical_damage(attacker, defender, base_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Hero;
    use crate::env::ScriptedRng;
    use crate::state::BoundingBox;
    use crate::stats::CombatantStats;

    fn hero(stats: CombatantStats) -> Hero {
        Hero::new("Aria", stats, BoundingBox::point(0.0, 0.0)).unwrap()
    }

    #[test]
    fn regular_and_critical_damage() {
        let attacker = hero(CombatantStats::new().with_power(8).with_critical_multiplier(2.0));
        let defender = hero(CombatantStats::new().with_defense(5));

        assert_eq!(hit_damage(&defender, 8), 3);
        // crit = 16, unblockable = 8, 16 - 5 = 11
        assert_eq!(critical_damage(&attacker, &defender, 8), 11);
    }

    #[test]
    fn heavy_defense_leaves_only_unblockable_damage() {
        let attacker = hero(CombatantStats::new().with_power(8).with_critical_multiplier(1.5));
        let defender = hero(CombatantStats::new().with_defense(50));

        assert_eq!(hit_damage(&defender, 8), 0);
        // crit = 12, unblockable = 4
        assert_eq!(critical_damage(&attacker, &defender, 8), 4);
    }

    #[test]
    fn base_damage_spans_power_to_double() {
        let attacker = hero(CombatantStats::new().with_power(8));
        let defender = hero(CombatantStats::new());
        let mut rng = ScriptedRng::new([0.0, 0.999_999]);

        assert_eq!(base_damage(&attacker, &defender, &mut rng), Ok(8));
        assert_eq!(base_damage(&attacker, &defender, &mut rng), Ok(16));
        assert_eq!(base_damage_min(&attacker), 8);
        assert_eq!(base_damage_max(&attacker), 16);
    }

    #[test]
    fn average_follows_luck() {
        let defender = hero(CombatantStats::new());
        let even = hero(CombatantStats::new().with_power(10));
        let lucky = hero(CombatantStats::new().with_power(10).with_luck(16));
        let unlucky = hero(CombatantStats::new().with_power(10).with_luck(-16));

        assert_eq!(base_damage_avg(&even, &defender), 15);
        // sqrt(0.5) * 10 = 7.07
        assert_eq!(base_damage_avg(&lucky, &defender), 17);
        // 0.25 * 10 = 2.5
        assert_eq!(base_damage_avg(&unlucky, &defender), 12);
    }

    #[test]
    fn preview_envelope() {
        let attacker = hero(
            CombatantStats::new()
                .with_power(8)
                .with_critical_multiplier(2.0),
        );
        let defender = hero(CombatantStats::new().with_defense(5));
        let preview = DamagePreview::between(&attacker, &defender);

        assert_eq!(preview.base_min, 8);
        assert_eq!(preview.base_max, 16);
        assert_eq!(preview.hit_min, 3);
        assert_eq!(preview.hit_max, 11);
        assert_eq!(preview.critical_min, 11);
        assert_eq!(preview.critical_max, 27);
        assert!(preview.hit_min <= preview.hit_avg && preview.hit_avg <= preview.hit_max);
    }
}
