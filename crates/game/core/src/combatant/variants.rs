use crate::state::{BoundingBox, Direction};
use crate::stats::{CombatStatistics, CombatantStats, ConfigurationError};

use super::{ActorState, Combatant};

/// Combatant variant tag, used by data files.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombatantKind {
    Hero,
    #[default]
    Monster,
}

/// Player-controlled character. Always narrated by name.
#[derive(Clone, Debug, PartialEq)]
pub struct Hero {
    actor: ActorState,
}

impl Hero {
    pub fn new(
        name: impl Into<String>,
        stats: CombatantStats,
        position: BoundingBox,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            actor: ActorState::new(name, false, stats, position)?,
        })
    }

    #[must_use]
    pub fn facing(mut self, facing: Direction) -> Self {
        self.actor.set_facing(facing);
        self
    }

    pub fn actor(&self) -> &ActorState {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut ActorState {
        &mut self.actor
    }
}

/// Enemy combatant.
///
/// Monsters are generic by default ("the goblin"); unique monsters such as
/// bosses opt out with [`Monster::unique`].
#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    actor: ActorState,
}

impl Monster {
    pub fn new(
        name: impl Into<String>,
        stats: CombatantStats,
        position: BoundingBox,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            actor: ActorState::new(name, true, stats, position)?,
        })
    }

    /// A monster narrated by its proper name.
    pub fn unique(
        name: impl Into<String>,
        stats: CombatantStats,
        position: BoundingBox,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            actor: ActorState::new(name, false, stats, position)?,
        })
    }

    #[must_use]
    pub fn facing(mut self, facing: Direction) -> Self {
        self.actor.set_facing(facing);
        self
    }

    pub fn actor(&self) -> &ActorState {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut ActorState {
        &mut self.actor
    }
}

macro_rules! delegate_to_actor {
    ($variant:ty) => {
        impl Combatant for $variant {
            fn name(&self) -> &str {
                self.actor.name()
            }

            fn is_generic(&self) -> bool {
                self.actor.is_generic()
            }

            fn stats(&self) -> &CombatantStats {
                self.actor.stats()
            }

            fn damage_taken(&self) -> u32 {
                self.actor.damage_taken()
            }

            fn apply_damage(&mut self, amount: u32) {
                self.actor.apply_damage(amount);
            }

            fn position(&self) -> &BoundingBox {
                self.actor.position()
            }

            fn facing_direction(&self) -> Direction {
                self.actor.facing()
            }

            fn statistics(&self) -> &CombatStatistics {
                self.actor.statistics()
            }

            fn statistics_mut(&mut self) -> &mut CombatStatistics {
                self.actor.statistics_mut()
            }

            fn snapshot_copy(&self) -> Self {
                Self {
                    actor: self.actor.snapshot(),
                }
            }
        }
    };
}

delegate_to_actor!(Hero);
delegate_to_actor!(Monster);

/// Either variant, for rosters built from data files.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyCombatant {
    Hero(Hero),
    Monster(Monster),
}

impl AnyCombatant {
    pub fn kind(&self) -> CombatantKind {
        match self {
            AnyCombatant::Hero(_) => CombatantKind::Hero,
            AnyCombatant::Monster(_) => CombatantKind::Monster,
        }
    }

    pub fn actor(&self) -> &ActorState {
        match self {
            AnyCombatant::Hero(hero) => hero.actor(),
            AnyCombatant::Monster(monster) => monster.actor(),
        }
    }

    pub fn actor_mut(&mut self) -> &mut ActorState {
        match self {
            AnyCombatant::Hero(hero) => hero.actor_mut(),
            AnyCombatant::Monster(monster) => monster.actor_mut(),
        }
    }
}

impl From<Hero> for AnyCombatant {
    fn from(hero: Hero) -> Self {
        AnyCombatant::Hero(hero)
    }
}

impl From<Monster> for AnyCombatant {
    fn from(monster: Monster) -> Self {
        AnyCombatant::Monster(monster)
    }
}

impl Combatant for AnyCombatant {
    fn name(&self) -> &str {
        self.actor().name()
    }

    fn is_generic(&self) -> bool {
        self.actor().is_generic()
    }

    fn stats(&self) -> &CombatantStats {
        self.actor().stats()
    }

    fn damage_taken(&self) -> u32 {
        self.actor().damage_taken()
    }

    fn apply_damage(&mut self, amount: u32) {
        self.actor_mut().apply_damage(amount);
    }

    fn position(&self) -> &BoundingBox {
        self.actor().position()
    }

    fn facing_direction(&self) -> Direction {
        self.actor().facing()
    }

    fn statistics(&self) -> &CombatStatistics {
        self.actor().statistics()
    }

    fn statistics_mut(&mut self) -> &mut CombatStatistics {
        self.actor_mut().statistics_mut()
    }

    fn snapshot_copy(&self) -> Self {
        match self {
            AnyCombatant::Hero(hero) => AnyCombatant::Hero(hero.snapshot_copy()),
            AnyCombatant::Monster(monster) => AnyCombatant::Monster(monster.snapshot_copy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Monster {
        Monster::new(
            "goblin",
            CombatantStats::new().with_health(12).with_power(3),
            BoundingBox::new(4.0, 4.0, 8.0, 8.0),
        )
        .unwrap()
        .facing(Direction::Left)
    }

    #[test]
    fn variants_differ_only_in_narration() {
        let hero = Hero::new("Aria", CombatantStats::new(), BoundingBox::default()).unwrap();
        let boss = Monster::unique("Gorath", CombatantStats::new(), BoundingBox::default()).unwrap();
        assert!(!hero.is_generic());
        assert!(goblin().is_generic());
        assert!(!boss.is_generic());
    }

    #[test]
    fn snapshot_copy_is_independent() {
        let mut original = goblin();
        original.apply_damage(5);
        original.statistics_mut().record_defense(&crate::combat::AttackResult {
            swings: 2,
            dodges: 1,
            ..crate::combat::AttackResult::out_of_range()
        });

        let mut copy = original.snapshot_copy();
        assert_eq!(copy.stats(), original.stats());
        assert_eq!(copy.position(), original.position());
        assert_eq!(copy.facing_direction(), Direction::Left);
        assert_eq!(copy.damage_taken(), 5);
        assert_eq!(copy.statistics(), &CombatStatistics::default());
        assert!(copy.is_alive_for_attack());

        copy.apply_damage(100);
        copy.actor_mut()
            .set_position(BoundingBox::point(99.0, 99.0))
            .unwrap();
        assert_eq!(original.damage_taken(), 5);
        assert_eq!(original.position(), &BoundingBox::new(4.0, 4.0, 8.0, 8.0));
        assert_eq!(original.statistics().attacks_received(), 2);
    }

    #[test]
    fn any_combatant_delegates() {
        let mut any: AnyCombatant = goblin().into();
        assert_eq!(any.kind(), CombatantKind::Monster);
        assert_eq!(any.name(), "goblin");
        assert_eq!(any.power(), 3);
        any.apply_damage(12);
        assert!(!any.is_alive_for_attack());
        assert_eq!(any.remaining_health(), 0);

        let copy = any.snapshot_copy();
        assert_eq!(copy.kind(), CombatantKind::Monster);
        assert_eq!(copy.damage_taken(), 12);
    }
}
