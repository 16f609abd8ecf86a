//! Combatant construction errors.

use crate::error::{CombatError, ErrorSeverity};

/// Rejected combatant definition.
///
/// Raised by [`CombatantStats::validate`](super::CombatantStats::validate) and
/// every combatant constructor. Nonsensical stats fail fast here instead of
/// producing broken math later (e.g., dividing by zero attacks per turn).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("combatant name must not be empty")]
    EmptyName,

    #[error("health must be non-negative, got {0}")]
    NegativeHealth(i32),

    #[error("attacks per turn must be at least 1")]
    NoAttacksPerTurn,

    #[error("range must be a finite non-negative number, got {0}")]
    InvalidRange(f64),

    #[error("power must be non-negative, got {0}")]
    NegativePower(i32),

    #[error("defense must be non-negative, got {0}")]
    NegativeDefense(i32),

    #[error("critical multiplier must be a finite number >= 1.0, got {0}")]
    InvalidCriticalMultiplier(f64),

    /// Non-finite coordinates or negative extents.
    #[error("position box is malformed")]
    MalformedPosition,
}

impl CombatError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ConfigurationError::*;
        match self {
            EmptyName => "CONFIG_EMPTY_NAME",
            NegativeHealth(_) => "CONFIG_NEGATIVE_HEALTH",
            NoAttacksPerTurn => "CONFIG_NO_ATTACKS_PER_TURN",
            InvalidRange(_) => "CONFIG_INVALID_RANGE",
            NegativePower(_) => "CONFIG_NEGATIVE_POWER",
            NegativeDefense(_) => "CONFIG_NEGATIVE_DEFENSE",
            InvalidCriticalMultiplier(_) => "CONFIG_INVALID_CRITICAL_MULTIPLIER",
            MalformedPosition => "CONFIG_MALFORMED_POSITION",
        }
    }
}
