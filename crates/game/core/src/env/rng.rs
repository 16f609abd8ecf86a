//! Injected random sources for combat resolution.
//!
//! The engine never owns randomness. Every draw goes through an [`RngSource`]
//! handed in by the caller, which keeps a resolved attack reproducible given
//! the same source state.
//!
//! # Determinism
//!
//! All bundled implementations are deterministic: given the same seed (or the
//! same script) they produce the same sequence of draws.

use std::collections::VecDeque;

use crate::error::{CombatError, ErrorSeverity};

/// Errors raised by a random source.
///
/// The engine cannot recover from a broken entropy source, so these propagate
/// unchanged to the caller.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RngError {
    /// The source has no more values to hand out.
    #[error("random source exhausted after {draws} draws")]
    Exhausted { draws: u64 },

    /// The source produced a value outside `[0, 1)`.
    #[error("random source produced {value}, expected a value in [0, 1)")]
    OutOfRange { value: f64 },
}

impl CombatError for RngError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            RngError::Exhausted { .. } => "RNG_EXHAUSTED",
            RngError::OutOfRange { .. } => "RNG_OUT_OF_RANGE",
        }
    }
}

/// Source of uniform draws in `[0, 1)`.
pub trait RngSource {
    /// Draw the next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> Result<f64, RngError>;
}

impl<R: RngSource + ?Sized> RngSource for &mut R {
    fn next_unit(&mut self) -> Result<f64, RngError> {
        (**self).next_unit()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64 bits of state, 32 bits of output per step.
/// Each call advances the internal state, so a `PcgRng` is a stream rather
/// than a keyed hash.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Returns the next 32-bit value and advances the stream.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl RngSource for PcgRng {
    fn next_unit(&mut self) -> Result<f64, RngError> {
        // 2^32 divisor keeps the result strictly below 1.0.
        Ok(f64::from(self.next_u32()) / 4_294_967_296.0)
    }
}

/// Fixed sequence of draws, for tests and replays.
///
/// Fails with [`RngError::Exhausted`] once the script runs out, and with
/// [`RngError::OutOfRange`] if a scripted value lies outside `[0, 1)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedRng {
    values: VecDeque<f64>,
    draws: u64,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Number of values left in the script.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RngSource for ScriptedRng {
    fn next_unit(&mut self) -> Result<f64, RngError> {
        let value = self
            .values
            .pop_front()
            .ok_or(RngError::Exhausted { draws: self.draws })?;
        if !(0.0..1.0).contains(&value) {
            return Err(RngError::OutOfRange { value });
        }
        self.draws += 1;
        Ok(value)
    }
}

/// Compute a deterministic seed from a base seed and a trial index.
///
/// Used to give each simulated duel its own independent stream while keeping
/// the whole batch reproducible from one base seed.
pub fn compute_seed(base_seed: u64, trial: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = base_seed;
    hash ^= trial.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
