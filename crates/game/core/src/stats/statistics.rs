//! Per-combatant ledger of resolved attacks.
//!
//! The ledger is owned by exactly one combatant and only the attack resolver
//! writes to it. Every counter is monotonically non-decreasing for the life of
//! an encounter; [`CombatStatistics::reset`] is the only way back to zero and
//! the engine never calls it.

use crate::combat::AttackResult;

/// Counters for one combatant, both as attacker and as defender.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStatistics {
    // Attacker side
    pub(crate) attacks_made: u64,
    pub(crate) hits: u64,
    pub(crate) misses: u64,
    pub(crate) dodges: u64,
    pub(crate) critical_hits: u64,

    // Defender side
    pub(crate) attacks_received: u64,
    pub(crate) attacks_dodged: u64,

    pub(crate) hit_damage_total: u64,
    pub(crate) critical_damage_total: u64,
}

/// Returns `100 * part / whole`, or 0 when `whole` is 0.
fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}

impl CombatStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter. Caller-only; the resolver never resets a ledger.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold one resolved action into the attacker's counters.
    pub(crate) fn record_attack(&mut self, result: &AttackResult) {
        self.attacks_made += u64::from(result.swings);
        self.hits += u64::from(result.hits);
        self.misses += u64::from(result.misses);
        self.dodges += u64::from(result.dodges);
        self.critical_hits += u64::from(result.criticals);
        self.hit_damage_total += result.hit_damage;
        self.critical_damage_total += result.critical_damage;
    }

    /// Fold one resolved action into the defender's counters.
    pub(crate) fn record_defense(&mut self, result: &AttackResult) {
        self.attacks_received += u64::from(result.swings);
        self.attacks_dodged += u64::from(result.dodges);
    }

    // ===== raw counters =====

    pub fn attacks_made(&self) -> u64 {
        self.attacks_made
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn dodges(&self) -> u64 {
        self.dodges
    }

    pub fn critical_hits(&self) -> u64 {
        self.critical_hits
    }

    pub fn attacks_received(&self) -> u64 {
        self.attacks_received
    }

    pub fn attacks_dodged(&self) -> u64 {
        self.attacks_dodged
    }

    pub fn hit_damage_total(&self) -> u64 {
        self.hit_damage_total
    }

    pub fn critical_damage_total(&self) -> u64 {
        self.critical_damage_total
    }

    // ===== derived =====

    /// Regular hits plus critical hits.
    pub fn total_hits(&self) -> u64 {
        self.hits + self.critical_hits
    }

    pub fn total_damage(&self) -> u64 {
        self.hit_damage_total + self.critical_damage_total
    }

    pub fn hit_rate(&self) -> f64 {
        percent(self.hits, self.attacks_made)
    }

    pub fn miss_rate(&self) -> f64 {
        percent(self.misses, self.attacks_made)
    }

    pub fn dodge_rate(&self) -> f64 {
        percent(self.dodges, self.attacks_made)
    }

    pub fn critical_rate(&self) -> f64 {
        percent(self.critical_hits, self.attacks_made)
    }

    /// Share of incoming swings this combatant dodged.
    pub fn dodged_attacks_rate(&self) -> f64 {
        percent(self.attacks_dodged, self.attacks_received)
    }

    pub fn avg_damage_per_attack(&self) -> f64 {
        ratio(self.total_damage(), self.attacks_made)
    }

    pub fn avg_damage_per_hit(&self) -> f64 {
        ratio(self.total_damage(), self.total_hits())
    }

    pub fn avg_damage_per_turn(&self, attacks_per_turn: u32) -> f64 {
        self.avg_damage_per_attack() * f64::from(attacks_per_turn)
    }

    pub fn turns_spent_attacking(&self, attacks_per_turn: u32) -> f64 {
        ratio(self.attacks_made, u64::from(attacks_per_turn))
    }

    /// Bundle every derivation into one value for reporting.
    pub fn report(&self, attacks_per_turn: u32) -> StatisticsReport {
        StatisticsReport {
            attacks_made: self.attacks_made,
            total_hits: self.total_hits(),
            total_damage: self.total_damage(),
            hit_rate: self.hit_rate(),
            miss_rate: self.miss_rate(),
            dodge_rate: self.dodge_rate(),
            critical_rate: self.critical_rate(),
            dodged_attacks_rate: self.dodged_attacks_rate(),
            avg_damage_per_attack: self.avg_damage_per_attack(),
            avg_damage_per_hit: self.avg_damage_per_hit(),
            avg_damage_per_turn: self.avg_damage_per_turn(attacks_per_turn),
            turns_spent_attacking: self.turns_spent_attacking(attacks_per_turn),
        }
    }
}

/// Snapshot of every derived rate of a [`CombatStatistics`] ledger.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsReport {
    pub attacks_made: u64,
    pub total_hits: u64,
    pub total_damage: u64,
    pub hit_rate: f64,
    pub miss_rate: f64,
    pub dodge_rate: f64,
    pub critical_rate: f64,
    pub dodged_attacks_rate: f64,
    pub avg_damage_per_attack: f64,
    pub avg_damage_per_hit: f64,
    pub avg_damage_per_turn: f64,
    pub turns_spent_attacking: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CombatStatistics {
        let mut stats = CombatStatistics::new();
        stats.record_attack(&AttackResult {
            swings: 10,
            hits: 5,
            misses: 2,
            dodges: 1,
            criticals: 2,
            hit_damage: 20,
            critical_damage: 30,
            ..AttackResult::out_of_range()
        });
        stats.record_defense(&AttackResult {
            swings: 4,
            dodges: 1,
            ..AttackResult::out_of_range()
        });
        stats
    }

    #[test]
    fn empty_ledger_derives_zero() {
        let stats = CombatStatistics::new();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.miss_rate(), 0.0);
        assert_eq!(stats.dodge_rate(), 0.0);
        assert_eq!(stats.critical_rate(), 0.0);
        assert_eq!(stats.dodged_attacks_rate(), 0.0);
        assert_eq!(stats.avg_damage_per_attack(), 0.0);
        assert_eq!(stats.avg_damage_per_hit(), 0.0);
        assert_eq!(stats.avg_damage_per_turn(3), 0.0);
        assert_eq!(stats.turns_spent_attacking(3), 0.0);
    }

    #[test]
    fn rates_are_percentages_of_attacks_made() {
        let stats = sample();
        assert_eq!(stats.total_hits(), 7);
        assert_eq!(stats.hit_rate(), 50.0);
        assert_eq!(stats.miss_rate(), 20.0);
        assert_eq!(stats.dodge_rate(), 10.0);
        assert_eq!(stats.critical_rate(), 20.0);
        assert_eq!(stats.dodged_attacks_rate(), 25.0);
    }

    #[test]
    fn damage_averages() {
        let stats = sample();
        assert_eq!(stats.avg_damage_per_attack(), 5.0);
        assert!((stats.avg_damage_per_hit() - 50.0 / 7.0).abs() < 1e-9);
        assert_eq!(stats.avg_damage_per_turn(2), 10.0);
        assert_eq!(stats.turns_spent_attacking(2), 5.0);
    }

    #[test]
    fn derivations_are_pure_reads() {
        let stats = sample();
        let first = stats.report(2);
        let second = stats.report(2);
        assert_eq!(first, second);
        assert_eq!(stats, sample());
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut stats = sample();
        stats.reset();
        assert_eq!(stats, CombatStatistics::default());
    }
}
