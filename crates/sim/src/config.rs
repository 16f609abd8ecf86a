//! Simulator configuration from environment variables.
use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// How the final report is printed to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Simulator run configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub roster_path: PathBuf,
    pub rules_path: Option<PathBuf>,
    /// Roster name of the challenger; first roster entry when unset.
    pub attacker: Option<String>,
    /// Roster name of the opponent; second roster entry when unset.
    pub defender: Option<String>,
    pub seed: u64,
    pub trials: u32,
    pub max_rounds: u32,
    pub format: OutputFormat,
}

impl SimConfig {
    pub const DEFAULT_TRIALS: u32 = 1000;
    pub const DEFAULT_MAX_ROUNDS: u32 = 100;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BATTLER_ROSTER` - RON roster path (required)
    /// - `BATTLER_RULES` - TOML combat rules path
    /// - `BATTLER_ATTACKER`, `BATTLER_DEFENDER` - roster names
    /// - `BATTLER_SEED` - base seed (random when unset)
    /// - `BATTLER_TRIALS` - odds estimation trials (default: 1000)
    /// - `BATTLER_MAX_ROUNDS` - round cap per duel (default: 100)
    /// - `BATTLER_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let roster_path = lookup("BATTLER_ROSTER")
            .map(PathBuf::from)
            .context("BATTLER_ROSTER must point to a roster file")?;

        let seed = match parse_var::<u64, _>(&lookup, "BATTLER_SEED")? {
            Some(seed) => seed,
            None => rand::random(),
        };

        Ok(Self {
            roster_path,
            rules_path: lookup("BATTLER_RULES").map(PathBuf::from),
            attacker: lookup("BATTLER_ATTACKER"),
            defender: lookup("BATTLER_DEFENDER"),
            seed,
            trials: parse_var(&lookup, "BATTLER_TRIALS")?.unwrap_or(Self::DEFAULT_TRIALS),
            max_rounds: parse_var(&lookup, "BATTLER_MAX_ROUNDS")?
                .unwrap_or(Self::DEFAULT_MAX_ROUNDS),
            format: parse_var(&lookup, "BATTLER_FORMAT")?.unwrap_or_default(),
        })
    }
}

/// Unset is `None`; set but unparsable is an error naming the variable.
fn parse_var<T, F>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid {key}={raw:?}: {e}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_roster_is_set() {
        let config = SimConfig::from_lookup(lookup(&[
            ("BATTLER_ROSTER", "roster.ron"),
            ("BATTLER_SEED", "7"),
        ]))
        .unwrap();

        assert_eq!(config.roster_path, PathBuf::from("roster.ron"));
        assert_eq!(config.rules_path, None);
        assert_eq!(config.seed, 7);
        assert_eq!(config.trials, SimConfig::DEFAULT_TRIALS);
        assert_eq!(config.max_rounds, SimConfig::DEFAULT_MAX_ROUNDS);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn roster_is_required() {
        assert!(SimConfig::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn reads_every_variable() {
        let config = SimConfig::from_lookup(lookup(&[
            ("BATTLER_ROSTER", "roster.ron"),
            ("BATTLER_RULES", "rules.toml"),
            ("BATTLER_ATTACKER", "Aria"),
            ("BATTLER_DEFENDER", "goblin"),
            ("BATTLER_SEED", "42"),
            ("BATTLER_TRIALS", "10"),
            ("BATTLER_MAX_ROUNDS", "5"),
            ("BATTLER_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.rules_path, Some(PathBuf::from("rules.toml")));
        assert_eq!(config.attacker.as_deref(), Some("Aria"));
        assert_eq!(config.defender.as_deref(), Some("goblin"));
        assert_eq!((config.trials, config.max_rounds), (10, 5));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn malformed_numbers_name_the_variable() {
        let err = SimConfig::from_lookup(lookup(&[
            ("BATTLER_ROSTER", "roster.ron"),
            ("BATTLER_TRIALS", "many"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("BATTLER_TRIALS"));
    }
}
