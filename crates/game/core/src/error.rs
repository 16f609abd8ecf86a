//! Common error infrastructure for battler-core.
//!
//! This module provides the shared severity classification and trait used by
//! every error type in the crate. Domain-specific errors (`ConfigurationError`,
//! `RngError`) live next to the code that produces them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure domain has its own error enum
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Soft Failures**: An out-of-range attack is a normal result, never an error

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: Unrecoverable errors (e.g., a broken entropy source)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero attacks per turn, negative health
    Validation,

    /// Fatal error - the engine cannot continue meaningfully.
    ///
    /// Examples: RNG exhausted, RNG produced a value outside `[0, 1)`
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all battler-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
