//! Expected scores and the 0–1000 reporting scale.
//!
//! Purpose
//! -------
//! Turn fitted parameters into per-student expected scores (the row sums of
//! the probability grid) and map those onto the integer 0–1000 scale used
//! in reports.
//!
//! Key behaviors
//! -------------
//! - `points = round(expected / n_items * 1000)`, so a student expected to
//!   answer everything correctly lands on exactly 1000.
//! - For a fixed item block with positive discriminations, both outputs are
//!   monotone non-decreasing in a student's ability.
use crate::irt::core::params::ParamSet;
use crate::irt::core::probability::probabilities;
use ndarray::{Array1, Axis};

/// Expected number of correct responses per student.
///
/// Row sums of the probability grid; length `n_students`, each entry in
/// `[0, n_items]`.
pub fn expected_scores(params: &ParamSet) -> Array1<f64> {
    probabilities(params).sum_axis(Axis(1))
}

/// Map expected scores onto the integer 0–1000 scale.
///
/// Each entry is `round(expected / n_items * 1000)`. Inputs are expected
/// scores out of `n_items`, so results always land in `0..=1000`.
pub fn scale_scores(expected: &Array1<f64>, n_items: usize) -> Vec<u32> {
    expected.iter().map(|&e| (e / n_items as f64 * 1000.0).round() as u32).collect()
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
    // - Expected scores against a hand-computed grid.
    // - Monotonicity of scores in theta for fixed items with a > 0.
    // - Endpoints and rounding of the 0-1000 scale.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify expected scores against a closed form with zero
    // discrimination.
    //
    // Given
    // -----
    // - Three items with a = 0 and c = 0.2, so every cell is
    //   0.2 + 0.8 * 0.5 = 0.6 regardless of theta.
    //
    // Expect
    // ------
    // - Expected score 1.8 for each student; 600 points.
    fn expected_scores_match_flat_grid() {
        let items = ItemParams::new(
            array![0.0, 0.0, 0.0],
            array![0.0, 0.0, 0.0],
            array![0.2, 0.2, 0.2],
        )
        .unwrap();
        let params = ParamSet::new(items, array![-1.0, 2.0]).unwrap();

        let expected = expected_scores(&params);
        assert!((expected[0] - 1.8).abs() < 1e-12);
        assert!((expected[1] - 1.8).abs() < 1e-12);

        assert_eq!(scale_scores(&expected, 3), vec![600, 600]);
    }

    #[test]
    // Purpose
    // -------
    // Verify scores never decrease as a student's theta rises.
    //
    // Given
    // -----
    // - A fixed two-item block with positive discriminations and students
    //   ordered by ability.
    //
    // Expect
    // ------
    // - Expected scores and points both non-decreasing across students.
    fn scores_are_monotone_in_theta() {
        let items = ItemParams::new(array![0.9, 1.7], array![-0.3, 0.8], array![0.15, 0.25])
            .unwrap();
        let params =
            ParamSet::new(items, array![-2.0, -0.5, 0.0, 0.5, 2.0]).unwrap();

        let expected = expected_scores(&params);
        let points = scale_scores(&expected, 2);
        for i in 1..expected.len() {
            assert!(expected[i] >= expected[i - 1]);
            assert!(points[i] >= points[i - 1]);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the endpoints and half-up rounding of the reporting scale.
    //
    // Given
    // -----
    // - Expected scores of 0, all, one third, and two thirds of 3 items.
    //
    // Expect
    // ------
    // - 0, 1000, 333, and 667 points.
    fn scale_scores_rounds_to_unit_interval_endpoints() {
        let expected = array![0.0, 3.0, 1.0, 2.0];
        assert_eq!(scale_scores(&expected, 3), vec![0, 1000, 333, 667]);
    }
}
