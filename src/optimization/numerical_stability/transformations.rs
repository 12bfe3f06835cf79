//! Numerical stability utilities.
//!
//! Provides safe implementations of the nonlinear transforms used by the
//! probability model, written to avoid the overflow/underflow failure modes
//! of their naïve forms. The logistic function branches on the sign of its
//! argument so that `exp` is only ever evaluated at non-positive values,
//! which keeps `f64` arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`safe_sigmoid`]: overflow-free logistic function σ(x) = 1 / (1 + e⁻ˣ).
//! - [`clamp_unit`]: clamp a raw parameter into the closed interval [0, 1].

/// Numerically stable logistic function σ(x) = 1 / (1 + e⁻ˣ).
///
/// Branches on the sign of `x` so the exponential is only taken of a
/// non-positive argument:
///
/// - `x ≥ 0`: `1 / (1 + exp(-x))`
/// - `x < 0`: `exp(x) / (1 + exp(x))`
///
/// Both branches are free of overflow for every finite `x`. Deep tails
/// saturate to exactly `0.0` and `1.0` once the exponential underflows,
/// which downstream likelihood code tolerates by adding its epsilon inside
/// the logarithms.
///
/// # Notes
/// - `safe_sigmoid(0.0) == 0.5` exactly.
/// - Propagates NaN for NaN input; callers validate parameters upstream.
pub fn safe_sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Clamp a raw parameter into the closed unit interval [0, 1].
///
/// The guessing floor of the probability model is stored unconstrained and
/// may drift outside [0, 1] during optimization; every *use* of the floor
/// goes through this clamp instead of mutating the stored value.
///
/// # Notes
/// - Returns NaN for NaN input (the clamp cannot rank NaN); parameter
///   validation rejects non-finite values before they reach hot paths.
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of `safe_sigmoid` with the naïve formula in the moderate
    //   regime, its exact midpoint value, symmetry, and tail saturation.
    // - Monotonicity of `safe_sigmoid` over a wide grid.
    // - `clamp_unit` behavior inside, below, and above the unit interval.
    //
    // They intentionally DO NOT cover:
    // - Vectorized use over arrays; that lives with the probability-model
    //   tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `safe_sigmoid` matches the textbook formula where the
    // naïve evaluation is itself well-conditioned.
    //
    // Given
    // -----
    // - A grid of moderate arguments in [-30, 30].
    //
    // Expect
    // ------
    // - Agreement with 1 / (1 + exp(-x)) to tight absolute tolerance.
    fn safe_sigmoid_matches_naive_in_moderate_regime() {
        for i in -300..=300 {
            let x = i as f64 / 10.0;
            let naive = 1.0 / (1.0 + (-x).exp());
            assert!((safe_sigmoid(x) - naive).abs() < 1e-15, "mismatch at x = {x}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the exact midpoint and the symmetry σ(-x) = 1 - σ(x).
    //
    // Given
    // -----
    // - x = 0 and a handful of positive arguments.
    //
    // Expect
    // ------
    // - σ(0) is exactly 0.5; σ(-x) + σ(x) is 1 to within rounding.
    fn safe_sigmoid_midpoint_and_symmetry() {
        assert_eq!(safe_sigmoid(0.0), 0.5);
        for &x in &[0.5, 1.0, 3.0, 10.0, 25.0] {
            let sum = safe_sigmoid(x) + safe_sigmoid(-x);
            assert!((sum - 1.0).abs() < 1e-15, "asymmetry at x = {x}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that extreme arguments saturate without producing NaN or Inf.
    //
    // Given
    // -----
    // - Arguments deep in both tails, far past where exp(±x) overflows.
    //
    // Expect
    // ------
    // - Exactly 1.0 on the right tail, exactly 0.0 on the left tail, and
    //   finite values everywhere.
    fn safe_sigmoid_saturates_in_deep_tails() {
        assert_eq!(safe_sigmoid(800.0), 1.0);
        assert_eq!(safe_sigmoid(-800.0), 0.0);
        assert_eq!(safe_sigmoid(f64::MAX), 1.0);
        assert_eq!(safe_sigmoid(f64::MIN), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `safe_sigmoid` is monotone non-decreasing.
    //
    // Given
    // -----
    // - A wide, ordered grid of arguments spanning both tails.
    //
    // Expect
    // ------
    // - Successive outputs never decrease.
    fn safe_sigmoid_is_monotone() {
        let mut prev = safe_sigmoid(-500.0);
        for i in -100..=100 {
            let x = i as f64 / 2.0;
            let cur = safe_sigmoid(x);
            assert!(cur >= prev, "decrease at x = {x}");
            prev = cur;
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify `clamp_unit` on interior, boundary, and exterior inputs.
    //
    // Given
    // -----
    // - Values inside [0, 1], at its endpoints, and outside on both sides.
    //
    // Expect
    // ------
    // - Interior and boundary values pass through; exterior values map to
    //   the nearest endpoint.
    fn clamp_unit_pins_to_interval() {
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(0.0), 0.0);
        assert_eq!(clamp_unit(1.0), 1.0);
        assert_eq!(clamp_unit(-0.3), 0.0);
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
    }
}
