use crate::state::{BoundingBox, Direction};
use crate::stats::{CombatStatistics, CombatantStats, ConfigurationError};

/// State shared by every combatant variant.
///
/// Construction validates the stat profile and the position box; the
/// statistics ledger is created here, together with the combatant.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    name: String,
    is_generic: bool,
    stats: CombatantStats,
    damage_taken: u32,
    position: BoundingBox,
    facing: Direction,
    statistics: CombatStatistics,
}

impl ActorState {
    pub fn new(
        name: impl Into<String>,
        is_generic: bool,
        stats: CombatantStats,
        position: BoundingBox,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigurationError::EmptyName);
        }
        stats.validate()?;
        if !position.is_well_formed() {
            return Err(ConfigurationError::MalformedPosition);
        }

        Ok(Self {
            name,
            is_generic,
            stats,
            damage_taken: 0,
            position,
            facing: Direction::default(),
            statistics: CombatStatistics::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_generic(&self) -> bool {
        self.is_generic
    }

    pub fn stats(&self) -> &CombatantStats {
        &self.stats
    }

    pub fn damage_taken(&self) -> u32 {
        self.damage_taken
    }

    pub fn apply_damage(&mut self, amount: u32) {
        self.damage_taken = self.damage_taken.saturating_add(amount);
    }

    pub fn position(&self) -> &BoundingBox {
        &self.position
    }

    pub fn set_position(&mut self, position: BoundingBox) -> Result<(), ConfigurationError> {
        if !position.is_well_formed() {
            return Err(ConfigurationError::MalformedPosition);
        }
        self.position = position;
        Ok(())
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn set_facing(&mut self, facing: Direction) {
        self.facing = facing;
    }

    pub fn statistics(&self) -> &CombatStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut CombatStatistics {
        &mut self.statistics
    }

    /// Copy everything except the statistics ledger, which starts at zero.
    pub fn snapshot(&self) -> Self {
        Self {
            name: self.name.clone(),
            is_generic: self.is_generic,
            stats: self.stats.clone(),
            damage_taken: self.damage_taken,
            position: self.position,
            facing: self.facing,
            statistics: CombatStatistics::new(),
        }
    }
}
