//! The 3PL response-probability model.
//!
//! Purpose
//! -------
//! Evaluate `P(correct) = c + (1 - c) * sigmoid(a * (theta - b))` for single
//! cells and for the full students × items grid. The guessing floor `c` is
//! clamped to [0, 1] at every evaluation, so callers may hold unconstrained
//! `c` values during optimization.
//!
//! Key behaviors
//! -------------
//! - [`p_3pl`] is the scalar kernel; [`probability_matrix`] broadcasts it
//!   over the `(n_students, n_items)` grid in one pass.
//! - The sigmoid is the overflow-safe variant from
//!   [`numerical_stability`](crate::optimization::numerical_stability), so
//!   every finite input yields a finite probability in [0, 1].
//!
//! Testing notes
//! -------------
//! - Unit tests cover monotonicity in theta, the limiting values at the
//!   tails, clamping of out-of-range `c`, the difficulty midpoint, and
//!   agreement between the scalar and matrix forms.
use crate::irt::core::params::ParamSet;
use crate::optimization::numerical_stability::{clamp_unit, safe_sigmoid};
use ndarray::{Array2, ArrayView1};

/// Probability of a correct response for one student on one item.
///
/// Parameters
/// ----------
/// - `theta`: student ability.
/// - `a`: item discrimination.
/// - `b`: item difficulty.
/// - `c`: item guessing floor; clamped to [0, 1] before use.
///
/// Returns
/// -------
/// `f64` in [0, 1] for any finite inputs.
#[inline]
pub fn p_3pl(theta: f64, a: f64, b: f64, c: f64) -> f64 {
    let floor = clamp_unit(c);
    floor + (1.0 - floor) * safe_sigmoid(a * (theta - b))
}

/// Full probability grid for the given parameter views.
///
/// Shape is `(theta.len(), a.len())`; entry `(i, j)` is
/// `p_3pl(theta[i], a[j], b[j], c[j])`. Item views must share one length.
pub fn probability_matrix(
    a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>, c: ArrayView1<'_, f64>,
    theta: ArrayView1<'_, f64>,
) -> Array2<f64> {
    Array2::from_shape_fn((theta.len(), a.len()), |(i, j)| p_3pl(theta[i], a[j], b[j], c[j]))
}

/// Probability grid for a structured parameter set.
pub fn probabilities(params: &ParamSet) -> Array2<f64> {
    probability_matrix(
        params.items.a.view(),
        params.items.b.view(),
        params.items.c.view(),
        params.theta.view(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irt::core::params::ItemParams;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Monotonicity of `p_3pl` in theta for a > 0 and its tail limits
    //   (-> c as theta -> -inf, -> 1 as theta -> +inf).
    // - Clamping of `c` values outside [0, 1].
    // - The difficulty midpoint `P(b) = c + (1 - c) / 2`.
    // - Cell-for-cell agreement between the matrix and scalar forms.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify monotone non-decreasing behavior in theta for positive
    // discrimination.
    //
    // Given
    // -----
    // - a = 1.3, b = 0.2, c = 0.15 on an increasing theta grid.
    //
    // Expect
    // ------
    // - Probabilities never decrease along the grid.
    fn p_3pl_is_monotone_in_theta() {
        let mut previous = 0.0;
        for step in -40..=40 {
            let theta = step as f64 * 0.25;
            let p = p_3pl(theta, 1.3, 0.2, 0.15);
            assert!(p >= previous, "p decreased at theta = {theta}");
            previous = p;
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the tail limits: the guessing floor on the left, 1 on the
    // right.
    //
    // Given
    // -----
    // - theta = ±60 with a = 1.0, b = 0.0, c = 0.25.
    //
    // Expect
    // ------
    // - p(-60) within 1e-12 of 0.25; p(+60) within 1e-12 of 1.
    fn p_3pl_saturates_to_floor_and_one() {
        assert!((p_3pl(-60.0, 1.0, 0.0, 0.25) - 0.25).abs() < 1e-12);
        assert!((p_3pl(60.0, 1.0, 0.0, 0.25) - 1.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify out-of-range guessing values are clamped at evaluation.
    //
    // Given
    // -----
    // - c = -0.5 and c = 1.5 at moderate theta.
    //
    // Expect
    // ------
    // - c = -0.5 behaves as c = 0; c = 1.5 pins the probability at 1.
    fn p_3pl_clamps_guessing() {
        assert_eq!(p_3pl(0.3, 1.0, 0.0, -0.5), p_3pl(0.3, 1.0, 0.0, 0.0));
        assert_eq!(p_3pl(0.3, 1.0, 0.0, 1.5), 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the difficulty parameter marks the sigmoid midpoint.
    //
    // Given
    // -----
    // - theta = b = 0.7 with c = 0.2.
    //
    // Expect
    // ------
    // - P = c + (1 - c) / 2 = 0.6 exactly up to rounding.
    fn p_3pl_midpoint_at_difficulty() {
        assert!((p_3pl(0.7, 2.0, 0.7, 0.2) - 0.6).abs() < 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify the matrix form matches the scalar kernel cell-for-cell.
    //
    // Given
    // -----
    // - Two items with distinct parameters and three students.
    //
    // Expect
    // ------
    // - Every grid entry equals the corresponding `p_3pl` call exactly.
    fn probability_matrix_matches_scalar() {
        let items =
            ItemParams::new(array![0.8, 1.6], array![-0.4, 0.9], array![0.1, 0.3]).unwrap();
        let params = ParamSet::new(items, array![-1.2, 0.0, 0.7]).unwrap();

        let grid = probabilities(&params);

        assert_eq!(grid.dim(), (3, 2));
        for ((i, j), &p) in grid.indexed_iter() {
            let expected = p_3pl(
                params.theta[i],
                params.items.a[j],
                params.items.b[j],
                params.items.c[j],
            );
            assert_eq!(p, expected);
        }
    }
}
