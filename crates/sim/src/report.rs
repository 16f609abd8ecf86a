//! One simulator run: matchup selection, odds, and a narrated duel.
use std::fmt;

use anyhow::Context;
use battler_content::Roster;
use battler_core::{
    AnyCombatant, AttackResolver, CombatConfig, CombatError, Combatant, DamagePreview, DuelSide,
    OddsEstimate, PcgRng, RngError, RollPolicy, StatisticsReport, compute_seed, estimate_odds,
    simulate_duel_observed,
};
use serde::Serialize;

use crate::config::SimConfig;
use crate::narration::{narrate, subject_name};

/// Seed context of the narrated duel; odds trials use context 0.
const NARRATED_DUEL_CONTEXT: u32 = 1;

#[derive(Clone, Debug, Serialize)]
pub struct SimReport {
    pub seed: u64,
    pub roll_policy: RollPolicy,
    pub challenger: String,
    pub opponent: String,
    pub challenger_preview: DamagePreview,
    pub opponent_preview: DamagePreview,
    pub odds: OddsEstimate,
    pub duel: NarratedDuel,
}

#[derive(Clone, Debug, Serialize)]
pub struct NarratedDuel {
    pub winner: Option<DuelSide>,
    pub rounds: u32,
    pub lines: Vec<String>,
    pub challenger_statistics: StatisticsReport,
    pub opponent_statistics: StatisticsReport,
}

/// Pick the challenger and opponent named in `config`, or the first two
/// roster entries.
pub fn select_matchup<'a>(
    roster: &'a Roster,
    config: &SimConfig,
) -> anyhow::Result<(&'a AnyCombatant, &'a AnyCombatant)> {
    let pick = |name: Option<&str>, index: usize| -> anyhow::Result<&'a AnyCombatant> {
        match name {
            Some(name) => roster
                .find(name)
                .with_context(|| format!("No combatant named '{name}' in roster")),
            None => roster
                .get(index)
                .with_context(|| format!("Roster needs at least {} combatants", index + 1)),
        }
    };

    let challenger = pick(config.attacker.as_deref(), 0)?;
    let opponent = pick(config.defender.as_deref(), 1)?;
    if challenger.name() == opponent.name() {
        anyhow::bail!("'{}' cannot duel itself", challenger.name());
    }
    Ok((challenger, opponent))
}

pub fn run(config: &SimConfig, rules: CombatConfig, roster: &Roster) -> anyhow::Result<SimReport> {
    let (challenger, opponent) = select_matchup(roster, config)?;
    let resolver = AttackResolver::new(rules);

    tracing::info!(
        challenger = challenger.name(),
        opponent = opponent.name(),
        seed = config.seed,
        trials = config.trials,
        "simulating matchup"
    );

    let odds = estimate_odds(
        &resolver,
        challenger,
        opponent,
        config.trials,
        config.max_rounds,
        config.seed,
    )
    .map_err(rng_failure)?;

    let mut lines = Vec::new();
    let mut rng = PcgRng::new(compute_seed(config.seed, 0, NARRATED_DUEL_CONTEXT));
    let outcome = simulate_duel_observed(
        &resolver,
        challenger,
        opponent,
        config.max_rounds,
        &mut rng,
        |side, result| match side {
            DuelSide::Challenger => lines.extend(narrate(challenger, opponent, result)),
            DuelSide::Opponent => lines.extend(narrate(opponent, challenger, result)),
        },
    )
    .map_err(rng_failure)?;

    lines.push(match outcome.winner {
        Some(DuelSide::Challenger) => format!("{} wins.", subject_name(challenger)),
        Some(DuelSide::Opponent) => format!("{} wins.", subject_name(opponent)),
        None => "Neither side prevails.".to_string(),
    });

    Ok(SimReport {
        seed: config.seed,
        roll_policy: resolver.config().roll_policy,
        challenger: challenger.name().to_string(),
        opponent: opponent.name().to_string(),
        challenger_preview: DamagePreview::between(challenger, opponent),
        opponent_preview: DamagePreview::between(opponent, challenger),
        odds,
        duel: NarratedDuel {
            winner: outcome.winner,
            rounds: outcome.rounds,
            lines,
            challenger_statistics: outcome
                .challenger_statistics
                .report(challenger.attacks_per_turn()),
            opponent_statistics: outcome
                .opponent_statistics
                .report(opponent.attacks_per_turn()),
        },
    })
}

fn rng_failure(err: RngError) -> anyhow::Error {
    tracing::error!(
        code = err.error_code(),
        severity = err.severity().as_str(),
        "random source failed"
    );
    anyhow::Error::new(err)
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vs {} (seed {}, {} rules)",
            self.challenger, self.opponent, self.seed, self.roll_policy
        )?;

        writeln!(f, "\nDamage per swing (min / avg / max)")?;
        for (name, preview) in [
            (&self.challenger, &self.challenger_preview),
            (&self.opponent, &self.opponent_preview),
        ] {
            writeln!(
                f,
                "  {name}: hit {} / {} / {}, critical {} / {} / {}",
                preview.hit_min,
                preview.hit_avg,
                preview.hit_max,
                preview.critical_min,
                preview.critical_avg,
                preview.critical_max
            )?;
        }

        let odds = &self.odds;
        writeln!(f, "\nOdds over {} duels", odds.trials)?;
        writeln!(f, "  {}: {:.1}%", self.challenger, odds.challenger_win_rate())?;
        writeln!(f, "  {}: {:.1}%", self.opponent, odds.opponent_win_rate())?;
        writeln!(f, "  draw: {:.1}%", odds.draw_rate())?;
        writeln!(f, "  average rounds: {:.2}", odds.average_rounds)?;

        writeln!(f, "\nSample duel ({} rounds)", self.duel.rounds)?;
        for line in &self.duel.lines {
            writeln!(f, "  {line}")?;
        }

        writeln!(f, "\nSample duel statistics")?;
        for (name, stats) in [
            (&self.challenger, &self.duel.challenger_statistics),
            (&self.opponent, &self.duel.opponent_statistics),
        ] {
            writeln!(
                f,
                "  {name}: {} swings, hit {:.1}%, crit {:.1}%, miss {:.1}%, dodged {:.1}%, {} damage",
                stats.attacks_made,
                stats.hit_rate,
                stats.critical_rate,
                stats.miss_rate,
                stats.dodge_rate,
                stats.total_damage
            )?;
        }
        Ok(())
    }
}
