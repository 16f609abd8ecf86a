//! Combatant stat profile.
//!
//! The profile is the immutable part of a combatant: everything the resolver
//! reads except the accumulated damage, position, and facing. Profiles are
//! validated once at construction so the resolver never has to re-check them.

use super::error::ConfigurationError;

/// Combat statistics of one combatant.
///
/// Percent-point stats (`miss_chance`, `critical_rate`) and the relative stats
/// (`accuracy`, `evasion`, `luck`) are signed and unbounded; the resolver
/// combines them into d100 thresholds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatantStats {
    /// Damage the combatant can absorb before it can no longer attack.
    pub health: i32,

    /// Swings per attack action.
    pub attacks_per_turn: u32,

    /// Maximum center-to-center distance for an attack.
    pub range: f64,

    /// Base damage scaling; a base roll lands in `[power, power * 2]`.
    pub power: i32,

    /// Flat reduction applied to every regular hit.
    pub defense: i32,

    pub accuracy: i32,
    pub evasion: i32,

    /// Added to the miss threshold (percentage points).
    pub miss_chance: i32,

    /// Chance of a critical hit (percentage points).
    pub critical_rate: i32,

    pub critical_multiplier: f64,

    /// Bias applied to every roll against an opponent with lower luck.
    pub luck: i32,
}

impl Default for CombatantStats {
    fn default() -> Self {
        Self {
            health: 10,
            attacks_per_turn: 1,
            range: 16.0,
            power: 1,
            defense: 0,
            accuracy: 0,
            evasion: 0,
            miss_chance: 0,
            critical_rate: 0,
            critical_multiplier: 2.0,
            luck: 0,
        }
    }
}

impl CombatantStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_attacks_per_turn(mut self, attacks_per_turn: u32) -> Self {
        self.attacks_per_turn = attacks_per_turn;
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    #[must_use]
    pub fn with_accuracy(mut self, accuracy: i32) -> Self {
        self.accuracy = accuracy;
        self
    }

    #[must_use]
    pub fn with_evasion(mut self, evasion: i32) -> Self {
        self.evasion = evasion;
        self
    }

    #[must_use]
    pub fn with_miss_chance(mut self, miss_chance: i32) -> Self {
        self.miss_chance = miss_chance;
        self
    }

    #[must_use]
    pub fn with_critical_rate(mut self, critical_rate: i32) -> Self {
        self.critical_rate = critical_rate;
        self
    }

    #[must_use]
    pub fn with_critical_multiplier(mut self, critical_multiplier: f64) -> Self {
        self.critical_multiplier = critical_multiplier;
        self
    }

    #[must_use]
    pub fn with_luck(mut self, luck: i32) -> Self {
        self.luck = luck;
        self
    }

    /// Check every construction invariant.
    ///
    /// Returns the first violation found, in field declaration order.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.health < 0 {
            return Err(ConfigurationError::NegativeHealth(self.health));
        }
        if self.attacks_per_turn == 0 {
            return Err(ConfigurationError::NoAttacksPerTurn);
        }
        if !self.range.is_finite() || self.range < 0.0 {
            return Err(ConfigurationError::InvalidRange(self.range));
        }
        if self.power < 0 {
            return Err(ConfigurationError::NegativePower(self.power));
        }
        if self.defense < 0 {
            return Err(ConfigurationError::NegativeDefense(self.defense));
        }
        if !self.critical_multiplier.is_finite() || self.critical_multiplier < 1.0 {
            return Err(ConfigurationError::InvalidCriticalMultiplier(
                self.critical_multiplier,
            ));
        }
        Ok(())
    }
}
