//! Combat result types.

use super::facing::Facing;

/// Outcome of one swing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackOutcome {
    /// Attack connected; defense applies.
    Hit,
    /// Attack missed the target.
    Miss,
    /// Defender evaded the attack.
    Dodge,
    /// Multiplied hit; part of it bypasses defense.
    Critical,
}

/// One resolved swing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swing {
    /// The d100 roll (1..=100) that decided the outcome.
    pub roll: i32,
    pub outcome: AttackOutcome,
    /// Damage applied to the defender (0 for misses and dodges).
    pub damage: u32,
}

/// Aggregate result of one attack action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// False when the defender was out of the attacker's range; nothing else
    /// happened in that case.
    pub in_range: bool,
    pub swings: u32,
    pub hits: u32,
    pub misses: u32,
    pub dodges: u32,
    pub criticals: u32,
    pub hit_damage: u64,
    pub critical_damage: u64,
    /// Defender's exposure at the time of the attack (None when out of range).
    pub facing: Option<Facing>,
    /// Per-swing records in roll order.
    pub details: Vec<Swing>,
}

impl AttackResult {
    /// The no-op result of an attack against a target out of range.
    pub fn out_of_range() -> Self {
        Self {
            in_range: false,
            swings: 0,
            hits: 0,
            misses: 0,
            dodges: 0,
            criticals: 0,
            hit_damage: 0,
            critical_damage: 0,
            facing: None,
            details: Vec::new(),
        }
    }

    pub fn total_damage(&self) -> u64 {
        self.hit_damage + self.critical_damage
    }
}
