//! Combatant roster loader.
//!
//! A roster is a RON list of [`CombatantSpec`] entries:
//!
//! ```ron
//! [
//!     (
//!         name: "Aria",
//!         kind: Hero,
//!         stats: (health: 30, power: 8, defense: 3, accuracy: 10),
//!         position: (center_x: 0.0, center_y: 0.0, half_width: 8.0, half_height: 8.0),
//!         facing: Right,
//!     ),
//!     (
//!         name: "goblin",
//!         stats: (health: 12, power: 3, evasion: 15),
//!         position: (center_x: 12.0, center_y: 0.0, half_width: 8.0, half_height: 8.0),
//!         facing: Left,
//!     ),
//! ]
//! ```
//!
//! Omitted stats take the core defaults; `kind` defaults to `Monster`.

use std::path::Path;

use anyhow::Context;
use battler_core::{
    AnyCombatant, BoundingBox, CombatError, CombatantKind, CombatantStats, Combatant,
    ConfigurationError, Direction, Hero, Monster,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One roster entry as written in data files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatantSpec {
    pub name: String,
    #[serde(default)]
    pub kind: CombatantKind,
    /// Narrate with an article. Defaults to `true` for monsters and `false`
    /// for heroes; heroes cannot be generic.
    #[serde(default)]
    pub generic: Option<bool>,
    #[serde(default)]
    pub stats: CombatantStats,
    pub position: BoundingBox,
    #[serde(default)]
    pub facing: Direction,
    /// Damage carried over from an earlier encounter.
    #[serde(default)]
    pub damage_taken: u32,
}

impl CombatantSpec {
    /// Build a validated combatant from this entry.
    pub fn build(&self) -> LoadResult<AnyCombatant> {
        let rejected = |err: ConfigurationError| {
            tracing::warn!(
                combatant = %self.name,
                code = err.error_code(),
                severity = err.severity().as_str(),
                "combatant rejected"
            );
            anyhow::anyhow!("{} [{}]", err, err.error_code())
        };

        let mut combatant: AnyCombatant = match (self.kind, self.generic) {
            (CombatantKind::Hero, Some(true)) => {
                anyhow::bail!("Hero '{}' cannot be generic", self.name)
            }
            (CombatantKind::Hero, _) => Hero::new(&self.name, self.stats.clone(), self.position)
                .map_err(rejected)?
                .into(),
            (CombatantKind::Monster, Some(false)) => {
                Monster::unique(&self.name, self.stats.clone(), self.position)
                    .map_err(rejected)?
                    .into()
            }
            (CombatantKind::Monster, _) => {
                Monster::new(&self.name, self.stats.clone(), self.position)
                    .map_err(rejected)?
                    .into()
            }
        };

        combatant.actor_mut().set_facing(self.facing);
        if self.damage_taken > 0 {
            combatant.apply_damage(self.damage_taken);
        }
        Ok(combatant)
    }
}

/// Validated combatants keyed by their unique names, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    combatants: Vec<AnyCombatant>,
}

impl Roster {
    pub fn find(&self, name: &str) -> Option<&AnyCombatant> {
        self.combatants.iter().find(|c| c.name() == name)
    }

    pub fn get(&self, index: usize) -> Option<&AnyCombatant> {
        self.combatants.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnyCombatant> {
        self.combatants.iter()
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }
}

/// Loader for combatant rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid roster {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let specs: Vec<CombatantSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut combatants: Vec<AnyCombatant> = Vec::with_capacity(specs.len());
        for spec in &specs {
            if combatants.iter().any(|c| c.name() == spec.name) {
                anyhow::bail!("Duplicate combatant name '{}'", spec.name);
            }
            let combatant = spec
                .build()
                .with_context(|| format!("Failed to build combatant '{}'", spec.name))?;
            combatants.push(combatant);
        }

        tracing::debug!(count = combatants.len(), "roster loaded");
        Ok(Roster { combatants })
    }
}
