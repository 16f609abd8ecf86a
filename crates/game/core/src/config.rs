/// Ordering of the per-swing decision checks.
///
/// The historical rules evaluated four independent checks where the last one
/// always won, which made critical hits and dodges unreachable. `Legacy`
/// reproduces that for replaying old balance data; `Prioritized` evaluates the
/// checks as an exclusive chain (Critical > Miss on 1 > Dodge > threshold).
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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RollPolicy {
    #[default]
    Prioritized,
    Legacy,
}

/// Combat rules configuration and tunable constants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// How a swing's roll is mapped to an outcome.
    pub roll_policy: RollPolicy,
}

impl CombatConfig {
    // ===== compile-time constants =====
    /// Number of faces on the outcome die; rolls land in `1..=D100`.
    pub const D100: i32 = 100;
    /// Baseline subtracted from the die when computing the hit threshold.
    pub const HIT_BASELINE: i32 = 90;
    /// Luck points per unit of curve exponent.
    pub const LUCK_SCALE: f64 = 16.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roll_policy(roll_policy: RollPolicy) -> Self {
        Self { roll_policy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_policy_parses_case_insensitively() {
        assert_eq!("legacy".parse::<RollPolicy>().unwrap(), RollPolicy::Legacy);
        assert_eq!(
            "Prioritized".parse::<RollPolicy>().unwrap(),
            RollPolicy::Prioritized
        );
        assert_eq!(RollPolicy::Legacy.to_string(), "legacy");
    }

    #[test]
    fn default_policy_is_prioritized() {
        assert_eq!(CombatConfig::default().roll_policy, RollPolicy::Prioritized);
    }
}
