//! What-if duels on snapshot copies.
//!
//! Simulations never touch the canonical combatants: each duel runs on
//! [`Combatant::snapshot_copy`] values with fresh statistics ledgers.
//!
//! A duel alternates attack actions, challenger first, until one side can no
//! longer attack, neither side can reach the other, or `max_rounds` elapse.

use crate::combat::{AttackResolver, AttackResult};
use crate::combatant::Combatant;
use crate::env::{PcgRng, RngError, RngSource, compute_seed};
use crate::stats::CombatStatistics;

/// Side of a two-combatant duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DuelSide {
    Challenger,
    Opponent,
}

/// Result of one simulated duel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelOutcome {
    /// `None` for a draw (round cap reached or nobody in range).
    pub winner: Option<DuelSide>,
    pub rounds: u32,
    pub challenger_damage_taken: u32,
    pub opponent_damage_taken: u32,
    pub challenger_statistics: CombatStatistics,
    pub opponent_statistics: CombatStatistics,
}

/// Run one duel between snapshot copies of `challenger` and `opponent`.
pub fn simulate_duel<A, B, R>(
    resolver: &AttackResolver,
    challenger: &A,
    opponent: &B,
    max_rounds: u32,
    rng: &mut R,
) -> Result<DuelOutcome, RngError>
where
    A: Combatant,
    B: Combatant,
    R: RngSource + ?Sized,
{
    simulate_duel_observed(resolver, challenger, opponent, max_rounds, rng, |_, _| {})
}

/// [`simulate_duel`], reporting every attack action to `observe` together
/// with the side that made it.
pub fn simulate_duel_observed<A, B, R, F>(
    resolver: &AttackResolver,
    challenger: &A,
    opponent: &B,
    max_rounds: u32,
    rng: &mut R,
    mut observe: F,
) -> Result<DuelOutcome, RngError>
where
    A: Combatant,
    B: Combatant,
    R: RngSource + ?Sized,
    F: FnMut(DuelSide, &AttackResult),
{
    let mut challenger = challenger.snapshot_copy();
    let mut opponent = opponent.snapshot_copy();

    let (mut winner, settled) = settled_before_start(&challenger, &opponent);
    let mut rounds = 0;

    while !settled && rounds < max_rounds {
        rounds += 1;

        let forward = resolver.attack(&mut challenger, &mut opponent, rng)?;
        observe(DuelSide::Challenger, &forward);
        if !opponent.is_alive_for_attack() {
            winner = Some(DuelSide::Challenger);
            break;
        }

        let backward = resolver.attack(&mut opponent, &mut challenger, rng)?;
        observe(DuelSide::Opponent, &backward);
        if !challenger.is_alive_for_attack() {
            winner = Some(DuelSide::Opponent);
            break;
        }

        // Positions never change during a duel
        if !forward.in_range && !backward.in_range {
            break;
        }
    }

    Ok(DuelOutcome {
        winner,
        rounds,
        challenger_damage_taken: challenger.damage_taken(),
        opponent_damage_taken: opponent.damage_taken(),
        challenger_statistics: challenger.statistics().clone(),
        opponent_statistics: opponent.statistics().clone(),
    })
}

/// Outcome fixed before any attack. The flag is set when at least one side
/// is already down; both down is a draw.
fn settled_before_start<A, B>(challenger: &A, opponent: &B) -> (Option<DuelSide>, bool)
where
    A: Combatant,
    B: Combatant,
{
    match (
        challenger.is_alive_for_attack(),
        opponent.is_alive_for_attack(),
    ) {
        (true, true) => (None, false),
        (true, false) => (Some(DuelSide::Challenger), true),
        (false, true) => (Some(DuelSide::Opponent), true),
        (false, false) => (None, true),
    }
}

/// Aggregated outcome of many independent duels.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OddsEstimate {
    pub trials: u32,
    pub challenger_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    pub average_rounds: f64,
}

impl OddsEstimate {
    fn rate(&self, count: u32) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        100.0 * f64::from(count) / f64::from(self.trials)
    }

    pub fn challenger_win_rate(&self) -> f64 {
        self.rate(self.challenger_wins)
    }

    pub fn opponent_win_rate(&self) -> f64 {
        self.rate(self.opponent_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }
}

/// Estimate win odds over `trials` duels.
///
/// Trial `i` uses a [`PcgRng`] seeded with `compute_seed(base_seed, i, 0)`, so
/// an estimate is reproducible from its base seed.
pub fn estimate_odds<A, B>(
    resolver: &AttackResolver,
    challenger: &A,
    opponent: &B,
    trials: u32,
    max_rounds: u32,
    base_seed: u64,
) -> Result<OddsEstimate, RngError>
where
    A: Combatant,
    B: Combatant,
{
    let mut estimate = OddsEstimate {
        trials,
        ..OddsEstimate::default()
    };
    let mut total_rounds: u64 = 0;

    for trial in 0..trials {
        let mut rng = PcgRng::new(compute_seed(base_seed, u64::from(trial), 0));
        let duel = simulate_duel(resolver, challenger, opponent, max_rounds, &mut rng)?;

        match duel.winner {
            Some(DuelSide::Challenger) => estimate.challenger_wins += 1,
            Some(DuelSide::Opponent) => estimate.opponent_wins += 1,
            None => estimate.draws += 1,
        }
        total_rounds += u64::from(duel.rounds);
    }

    if trials > 0 {
        estimate.average_rounds = total_rounds as f64 / f64::from(trials);
    }

    tracing::debug!(
        challenger = challenger.name(),
        opponent = opponent.name(),
        trials,
        challenger_wins = estimate.challenger_wins,
        opponent_wins = estimate.opponent_wins,
        draws = estimate.draws,
        "odds estimated"
    );

    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{Hero, Monster};
    use crate::state::BoundingBox;
    use crate::stats::CombatantStats;

    fn knight() -> Hero {
        Hero::new(
            "Aria",
            CombatantStats::new()
                .with_health(40)
                .with_power(10)
                .with_defense(4)
                .with_accuracy(20),
            BoundingBox::point(0.0, 0.0),
        )
        .unwrap()
    }

    fn rat() -> Monster {
        Monster::new(
            "rat",
            CombatantStats::new().with_health(3).with_power(1),
            BoundingBox::point(8.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn canonical_combatants_are_untouched() {
        let hero = knight();
        let rat = rat();
        let resolver = AttackResolver::default();
        let mut rng = PcgRng::new(3);

        let duel = simulate_duel(&resolver, &hero, &rat, 50, &mut rng).unwrap();

        assert!(duel.rounds >= 1);
        assert_eq!(hero, knight());
        assert_eq!(rat, self::rat());
        assert_eq!(hero.statistics().attacks_made(), 0);
    }

    #[test]
    fn out_of_reach_duel_is_a_draw() {
        let hero = knight();
        let mut far_rat = rat();
        far_rat
            .actor_mut()
            .set_position(BoundingBox::point(500.0, 0.0))
            .unwrap();
        let resolver = AttackResolver::default();
        let mut rng = PcgRng::new(3);

        let duel = simulate_duel(&resolver, &hero, &far_rat, 50, &mut rng).unwrap();

        assert_eq!(duel.winner, None);
        assert_eq!(duel.rounds, 1);
        assert_eq!(duel.challenger_statistics.attacks_made(), 0);
    }

    #[test]
    fn observer_sees_alternating_attacks() {
        let resolver = AttackResolver::default();
        let mut rng = PcgRng::new(5);
        let mut sides = Vec::new();

        let duel = simulate_duel_observed(&resolver, &knight(), &rat(), 50, &mut rng, |side, _| {
            sides.push(side)
        })
        .unwrap();

        assert_eq!(sides.first(), Some(&DuelSide::Challenger));
        assert!(sides.windows(2).all(|pair| pair[0] != pair[1]));
        let last_round_cut = u32::from(duel.winner == Some(DuelSide::Challenger));
        assert_eq!(sides.len() as u32, duel.rounds * 2 - last_round_cut);
    }

    #[test]
    fn downed_combatant_loses_without_a_round() {
        let hero = knight();
        let mut rat = rat();
        rat.apply_damage(3);
        let resolver = AttackResolver::default();
        let mut rng = PcgRng::new(3);

        let duel = simulate_duel(&resolver, &hero, &rat, 50, &mut rng).unwrap();

        assert_eq!(duel.winner, Some(DuelSide::Challenger));
        assert_eq!(duel.rounds, 0);
    }

    #[test]
    fn both_downed_is_a_draw_without_attacks() {
        let mut hero = knight();
        hero.apply_damage(40);
        let mut rat = rat();
        rat.apply_damage(3);
        let resolver = AttackResolver::default();
        let mut rng = PcgRng::new(3);
        let mut attacks = 0;

        let duel =
            simulate_duel_observed(&resolver, &hero, &rat, 50, &mut rng, |_, _| attacks += 1)
                .unwrap();

        assert_eq!(duel.winner, None);
        assert_eq!(duel.rounds, 0);
        assert_eq!(attacks, 0);
        assert_eq!(duel.challenger_statistics.attacks_made(), 0);
        assert_eq!(duel.opponent_statistics.attacks_made(), 0);
    }

    #[test]
    fn odds_are_reproducible_and_lopsided() {
        let resolver = AttackResolver::default();
        let first = estimate_odds(&resolver, &knight(), &rat(), 200, 50, 11).unwrap();
        let second = estimate_odds(&resolver, &knight(), &rat(), 200, 50, 11).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.challenger_wins + first.opponent_wins + first.draws, 200);
        assert!(first.challenger_win_rate() > 90.0);
    }

    #[test]
    fn zero_trials_yield_zero_rates() {
        let resolver = AttackResolver::default();
        let estimate = estimate_odds(&resolver, &knight(), &rat(), 0, 50, 1).unwrap();
        assert_eq!(estimate.challenger_win_rate(), 0.0);
        assert_eq!(estimate.average_rounds, 0.0);
    }
}
