//! Response-data container for 3PL IRT models.
//!
//! Purpose
//! -------
//! Provide a small, validated container for binary response matrices used by
//! the 3PL estimator. This module centralizes input validation for raw
//! response data so downstream code can assume clean 0/1 entries.
//!
//! Key behaviors
//! -------------
//! - [`ResponseMatrix`] enforces basic data invariants (non-empty in both
//!   dimensions, every entry exactly 0 or 1).
//!
//! Invariants & assumptions
//! ------------------------
//! - Every cell must be **exactly** `0.0` or `1.0`; there is no
//!   missing-value handling.
//! - The matrix must have at least one student (row) and one item (column).
//!
//! Conventions
//! -----------
//! - Rows are students, columns are items; indexing is 0-based.
//! - Entries are stored as `f64` so likelihood code can consume them without
//!   conversion.
//!
//! Downstream usage
//! ----------------
//! - Construct [`ResponseMatrix`] wherever raw responses enter the modeling
//!   stack (the CSV reader, the simulator, tests).
//! - Likelihood and gradient code may rely on these invariants and skip
//!   re-validating cells in the hot path.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior for `ResponseMatrix::new` (happy
//!   path, empty dimensions, non-binary and non-finite cells).
use crate::irt::errors::{IrtError, IrtResult};
use ndarray::Array2;

/// `ResponseMatrix` — validated binary response matrix (students × items).
///
/// Purpose
/// -------
/// Represent a single, validated matrix of observed exam outcomes for 3PL
/// estimation. This type centralizes the 0/1 check so the likelihood layer
/// can treat entries as exact Bernoulli observations.
///
/// Key behaviors
/// -------------
/// - Stores raw responses as an `ndarray::Array2<f64>`.
/// - Enforces non-emptiness and exact 0/1 entries at construction time via
///   [`ResponseMatrix::new`].
///
/// Fields
/// ------
/// - `responses`: `Array2<f64>`
///   Observed outcomes, shape `(n_students, n_items)`; every entry is
///   exactly `0.0` or `1.0`.
///
/// Invariants
/// ----------
/// - `responses.nrows() > 0` and `responses.ncols() > 0`.
/// - Every entry equals `0.0` or `1.0` exactly (NaN/±∞ are rejected by the
///   same check).
///
/// Performance
/// -----------
/// - Validation is O(N·M) due to a single scan over the matrix.
/// - After construction, this type is a lightweight container with no hidden
///   allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMatrix {
    /// Observed outcomes (every entry exactly 0.0 or 1.0).
    pub responses: Array2<f64>,
}

impl ResponseMatrix {
    /// Construct a validated [`ResponseMatrix`] from raw responses.
    ///
    /// Parameters
    /// ----------
    /// - `responses`: `Array2<f64>`
    ///   Raw outcome matrix, students as rows and items as columns. Must be
    ///   non-empty in both dimensions with every entry exactly 0 or 1.
    ///
    /// Returns
    /// -------
    /// `IrtResult<ResponseMatrix>`
    ///   - `Ok(ResponseMatrix)` if all invariants are satisfied.
    ///   - `Err(IrtError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `IrtError::EmptyResponseMatrix`
    ///   Returned when either dimension is zero.
    /// - `IrtError::NonBinaryResponse { row, col, value }`
    ///   Returned when any entry is not exactly 0 or 1 (including NaN/±∞);
    ///   the indices point to the first offending cell in row-major order.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `IrtError`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use irt_calibrate::irt::core::data::ResponseMatrix;
    /// #
    /// let data = ResponseMatrix::new(array![[1.0, 0.0], [0.0, 1.0]]).unwrap();
    /// assert_eq!(data.n_students(), 2);
    /// assert_eq!(data.n_items(), 2);
    /// ```
    pub fn new(responses: Array2<f64>) -> IrtResult<Self> {
        if responses.nrows() == 0 || responses.ncols() == 0 {
            return Err(IrtError::EmptyResponseMatrix);
        }

        for ((row, col), &value) in responses.indexed_iter() {
            if value != 0.0 && value != 1.0 {
                return Err(IrtError::NonBinaryResponse { row, col, value });
            }
        }

        Ok(ResponseMatrix { responses })
    }

    /// Number of students (rows).
    pub fn n_students(&self) -> usize {
        self.responses.nrows()
    }

    /// Number of items (columns).
    pub fn n_items(&self) -> usize {
        self.responses.ncols()
    }
}
