//! Luck-biased power curve over uniform draws.
//!
//! # Formula
//!
//! ```text
//! n = 1 + |luck| / 16
//! scale(x, luck) = x^(1/n)   if luck >= 0   (bends toward 1)
//!                = x^n       otherwise      (bends toward 0)
//! ```
//!
//! Both endpoints are fixed (`scale(0) = 0`, `scale(1) = 1`) and zero luck is
//! the identity, so luck only reshapes the distribution inside `[0, 1]`.

use crate::config::CombatConfig;
use crate::env::{RngError, RngSource};

/// Curve exponent for a luck value.
#[inline]
fn exponent(luck: i32) -> f64 {
    1.0 + f64::from(luck.unsigned_abs()) / CombatConfig::LUCK_SCALE
}

/// Warp `x ∈ [0, 1]` by `luck`.
pub fn scale(x: f64, luck: i32) -> f64 {
    let n = exponent(luck);
    if luck >= 0 { x.powf(1.0 / n) } else { x.powf(n) }
}

/// Draw one value from `rng` and map it to `0..bound` through the curve.
///
/// Exactly one draw is consumed even when `bound <= 0` (which yields 0), so
/// the number of draws per attack depends only on the rolled outcomes.
pub fn next_int<R>(bound: i32, luck: i32, rng: &mut R) -> Result<i32, RngError>
where
    R: RngSource + ?Sized,
{
    let u = rng.next_unit()?;
    if bound <= 0 {
        return Ok(0);
    }
    let value = (f64::from(bound) * scale(u, luck)).floor() as i32;
    // powf can round u < 1 up to exactly 1.0 for large luck
    Ok(value.clamp(0, bound - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn endpoints_are_fixed() {
        for luck in [-200, -16, -1, 0, 1, 16, 200] {
            assert_eq!(scale(0.0, luck), 0.0);
            assert_eq!(scale(1.0, luck), 1.0);
        }
    }

    #[test]
    fn zero_luck_is_identity() {
        for x in [0.0, 0.1, 0.25, 0.5, 0.99] {
            assert_eq!(scale(x, 0), x);
        }
    }

    #[test]
    fn luck_bends_the_curve() {
        // luck 16 → n = 2 → sqrt
        assert!((scale(0.25, 16) - 0.5).abs() < 1e-12);
        // luck -16 → n = 2 → square
        assert!((scale(0.5, -16) - 0.25).abs() < 1e-12);
        assert!(scale(0.5, 8) > 0.5);
        assert!(scale(0.5, -8) < 0.5);
    }

    #[test]
    fn next_int_floors_the_scaled_draw() {
        let mut rng = ScriptedRng::new([0.0, 0.555, 0.999_999]);
        assert_eq!(next_int(100, 0, &mut rng), Ok(0));
        assert_eq!(next_int(100, 0, &mut rng), Ok(55));
        assert_eq!(next_int(100, 0, &mut rng), Ok(99));
    }

    #[test]
    fn next_int_stays_below_bound_for_extreme_luck() {
        let mut rng = ScriptedRng::new([0.999_999_999]);
        assert_eq!(next_int(10, 100_000, &mut rng), Ok(9));
    }

    #[test]
    fn next_int_consumes_a_draw_for_empty_bound() {
        let mut rng = ScriptedRng::new([0.7]);
        assert_eq!(next_int(0, 5, &mut rng), Ok(0));
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn next_int_propagates_exhaustion() {
        let mut rng = ScriptedRng::new([]);
        assert_eq!(
            next_int(100, 0, &mut rng),
            Err(RngError::Exhausted { draws: 0 })
        );
    }
}
