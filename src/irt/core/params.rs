//! Parameter containers and the flat optimizer layout for 3PL models.
//!
//! Purpose
//! -------
//! Provide validated containers for item parameters and joint item/ability
//! parameter sets, together with the mapping between the structured form and
//! the flat vector the optimizer iterates on.
//!
//! Key behaviors
//! -------------
//! - [`ItemParams`] enforces equal-length, finite `a`/`b`/`c` blocks.
//! - [`ParamSet`] pairs an item block with a finite ability vector and owns
//!   the canonical starting point via [`ParamSet::init_3pl`].
//! - The flat layout is `[a | b | c | theta]` with length
//!   `3 * n_items + n_students`; [`split_flat`] exposes zero-copy views into
//!   it and [`ParamSet::from_flat`] rebuilds the validated structured form.
//!
//! Invariants & assumptions
//! ------------------------
//! - All blocks are non-empty and finite once construction succeeds.
//! - `a.len() == b.len() == c.len()` always; `theta` is independent of the
//!   item count.
//! - `c` is stored as-is; clamping to [0, 1] happens at probability
//!   evaluation, never in the container.
//!
//! Conventions
//! -----------
//! - Block order in the flat vector is fixed: discriminations, then
//!   difficulties, then guessing floors, then abilities.
//! - Validation errors carry the field name (`"a"`, `"b"`, `"c"`,
//!   `"theta"`) plus a 0-based index.
//!
//! Downstream usage
//! ----------------
//! - Models call [`ParamSet::init_3pl`] for the starting point,
//!   [`ParamSet::to_flat`] before optimization, and [`ParamSet::from_flat`]
//!   on the optimizer's estimate.
//! - Likelihood code uses [`split_flat`] per iteration to view the current
//!   blocks without copying.
//!
//! Testing notes
//! -------------
//! - Unit tests cover block validation (lengths, finiteness, emptiness), the
//!   fixed initialization values, the flat round-trip, and the view layout.
use crate::irt::errors::{ParamError, ParamResult};
use ndarray::{s, Array1, ArrayView1};

/// Default starting discrimination for every item.
pub const INIT_DISCRIMINATION: f64 = 1.0;
/// Default starting difficulty for every item.
pub const INIT_DIFFICULTY: f64 = 0.0;
/// Default starting guessing floor for every item.
pub const INIT_GUESSING: f64 = 0.2;
/// Default starting ability for every student.
pub const INIT_ABILITY: f64 = 0.0;

/// `ItemParams` — validated per-item 3PL parameter block.
///
/// Purpose
/// -------
/// Hold the three per-item parameter vectors with their basic invariants
/// established, so probability and scoring code can index them freely.
///
/// Fields
/// ------
/// - `a`: `Array1<f64>`
///   Discriminations; conventionally positive but not constrained.
/// - `b`: `Array1<f64>`
///   Difficulties; unconstrained.
/// - `c`: `Array1<f64>`
///   Guessing floors; nominally in [0, 1], clamped at every use rather than
///   constrained in storage.
///
/// Invariants
/// ----------
/// - All three blocks are non-empty, finite, and equal-length.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemParams {
    /// Per-item discriminations.
    pub a: Array1<f64>,
    /// Per-item difficulties.
    pub b: Array1<f64>,
    /// Per-item guessing floors (clamped to [0, 1] at use).
    pub c: Array1<f64>,
}

impl ItemParams {
    /// Construct a validated [`ItemParams`] block.
    ///
    /// Parameters
    /// ----------
    /// - `a`, `b`, `c`: `Array1<f64>`
    ///   Per-item parameter vectors; must be non-empty, finite, and of equal
    ///   length.
    ///
    /// Returns
    /// -------
    /// `ParamResult<ItemParams>`
    ///   - `Ok(ItemParams)` if all invariants are satisfied.
    ///   - `Err(ParamError)` naming the offending field otherwise.
    ///
    /// Errors
    /// ------
    /// - `ParamError::EmptyParams` when `a` is empty.
    /// - `ParamError::LengthMismatch { field, .. }` when `b` or `c` differ in
    ///   length from `a`.
    /// - `ParamError::NonFiniteParam { field, index, value }` for the first
    ///   NaN/±∞ entry in any block.
    pub fn new(a: Array1<f64>, b: Array1<f64>, c: Array1<f64>) -> ParamResult<Self> {
        if a.is_empty() {
            return Err(ParamError::EmptyParams);
        }
        for (field, block) in [("b", &b), ("c", &c)] {
            if block.len() != a.len() {
                return Err(ParamError::LengthMismatch {
                    field,
                    expected: a.len(),
                    actual: block.len(),
                });
            }
        }
        for (field, block) in [("a", &a), ("b", &b), ("c", &c)] {
            check_finite(field, block.view())?;
        }
        Ok(ItemParams { a, b, c })
    }

    /// Number of items covered by this block.
    pub fn n_items(&self) -> usize {
        self.a.len()
    }
}

/// `ParamSet` — joint item and ability parameters for one fitted model.
///
/// Purpose
/// -------
/// Pair an [`ItemParams`] block with a per-student ability vector and own
/// the mapping to and from the flat optimizer layout `[a | b | c | theta]`.
///
/// Fields
/// ------
/// - `items`: [`ItemParams`]
///   Validated per-item block.
/// - `theta`: `Array1<f64>`
///   Per-student abilities; non-empty and finite.
///
/// Invariants
/// ----------
/// - `theta` is non-empty and finite.
/// - `flat_len() == 3 * items.n_items() + theta.len()` always.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSet {
    /// Validated per-item block.
    pub items: ItemParams,
    /// Per-student abilities.
    pub theta: Array1<f64>,
}

impl ParamSet {
    /// Construct a validated [`ParamSet`].
    ///
    /// # Errors
    /// - `ParamError::EmptyParams` when `theta` is empty.
    /// - `ParamError::NonFiniteParam { field: "theta", .. }` for the first
    ///   non-finite ability.
    pub fn new(items: ItemParams, theta: Array1<f64>) -> ParamResult<Self> {
        if theta.is_empty() {
            return Err(ParamError::EmptyParams);
        }
        check_finite("theta", theta.view())?;
        Ok(ParamSet { items, theta })
    }

    /// The canonical deterministic starting point: `a = 1`, `b = 0`,
    /// `c = 0.2` per item and `theta = 0` per student.
    ///
    /// # Errors
    /// - `ParamError::EmptyParams` when either count is zero.
    pub fn init_3pl(n_students: usize, n_items: usize) -> ParamResult<Self> {
        let items = ItemParams::new(
            Array1::from_elem(n_items, INIT_DISCRIMINATION),
            Array1::from_elem(n_items, INIT_DIFFICULTY),
            Array1::from_elem(n_items, INIT_GUESSING),
        )?;
        ParamSet::new(items, Array1::from_elem(n_students, INIT_ABILITY))
    }

    /// Number of students (length of `theta`).
    pub fn n_students(&self) -> usize {
        self.theta.len()
    }

    /// Number of items (length of each item block).
    pub fn n_items(&self) -> usize {
        self.items.n_items()
    }

    /// Length of the flat layout, `3 * n_items + n_students`.
    pub fn flat_len(&self) -> usize {
        3 * self.n_items() + self.n_students()
    }

    /// Pack the blocks into the flat layout `[a | b | c | theta]`.
    pub fn to_flat(&self) -> Array1<f64> {
        let m = self.n_items();
        let mut flat = Array1::<f64>::zeros(self.flat_len());
        flat.slice_mut(s![..m]).assign(&self.items.a);
        flat.slice_mut(s![m..2 * m]).assign(&self.items.b);
        flat.slice_mut(s![2 * m..3 * m]).assign(&self.items.c);
        flat.slice_mut(s![3 * m..]).assign(&self.theta);
        flat
    }

    /// Rebuild a validated [`ParamSet`] from a flat vector.
    ///
    /// Parameters
    /// ----------
    /// - `flat`: `&Array1<f64>`
    ///   Flat layout `[a | b | c | theta]` of length
    ///   `3 * n_items + n_students`.
    /// - `n_students`, `n_items`: `usize`
    ///   Expected block sizes.
    ///
    /// Returns
    /// -------
    /// `ParamResult<ParamSet>` with owned, validated blocks.
    ///
    /// Errors
    /// ------
    /// - `ParamError::FlatLengthMismatch { expected, actual }` when the
    ///   vector length disagrees with the sizes.
    /// - Any block-validation error from [`ItemParams::new`] /
    ///   [`ParamSet::new`].
    pub fn from_flat(flat: &Array1<f64>, n_students: usize, n_items: usize) -> ParamResult<Self> {
        let blocks = split_flat(flat, n_students, n_items)?;
        let items =
            ItemParams::new(blocks.a.to_owned(), blocks.b.to_owned(), blocks.c.to_owned())?;
        ParamSet::new(items, blocks.theta.to_owned())
    }
}

/// Zero-copy views of the four blocks inside a flat parameter vector.
#[derive(Debug, Clone, Copy)]
pub struct FlatBlocks<'a> {
    /// Discrimination view, length `n_items`.
    pub a: ArrayView1<'a, f64>,
    /// Difficulty view, length `n_items`.
    pub b: ArrayView1<'a, f64>,
    /// Guessing view, length `n_items`.
    pub c: ArrayView1<'a, f64>,
    /// Ability view, length `n_students`.
    pub theta: ArrayView1<'a, f64>,
}

/// View the blocks of a flat vector without copying.
///
/// Used once per optimizer iteration, so this only checks the overall
/// length; entry finiteness is the optimizer's concern.
///
/// # Errors
/// - `ParamError::FlatLengthMismatch` when `flat.len()` is not
///   `3 * n_items + n_students`.
pub fn split_flat(
    flat: &Array1<f64>, n_students: usize, n_items: usize,
) -> ParamResult<FlatBlocks<'_>> {
    let expected = 3 * n_items + n_students;
    if flat.len() != expected {
        return Err(ParamError::FlatLengthMismatch { expected, actual: flat.len() });
    }
    Ok(FlatBlocks {
        a: flat.slice(s![..n_items]),
        b: flat.slice(s![n_items..2 * n_items]),
        c: flat.slice(s![2 * n_items..3 * n_items]),
        theta: flat.slice(s![3 * n_items..]),
    })
}

/// Reject the first non-finite entry in a block, naming the field.
fn check_finite(field: &'static str, block: ArrayView1<'_, f64>) -> ParamResult<()> {
    for (index, &value) in block.iter().enumerate() {
        if !value.is_finite() {
            return Err(ParamError::NonFiniteParam { field, index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Block validation in `ItemParams::new` and `ParamSet::new` (lengths,
    //   finiteness, emptiness, field naming).
    // - The fixed initialization values of `init_3pl`.
    // - The flat round-trip `to_flat` -> `from_flat` and the `split_flat`
    //   layout.
    // -------------------------------------------------------------------------

    fn small_set() -> ParamSet {
        let items = ItemParams::new(
            array![1.0, 1.5],
            array![-0.5, 0.5],
            array![0.1, 0.3],
        )
        .unwrap();
        ParamSet::new(items, array![-1.0, 0.0, 1.0]).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify construction succeeds for consistent finite blocks.
    //
    // Given
    // -----
    // - Two items and three students with plain values.
    //
    // Expect
    // ------
    // - Counts and flat length reported correctly.
    fn param_set_reports_sizes() {
        let set = small_set();
        assert_eq!(set.n_items(), 2);
        assert_eq!(set.n_students(), 3);
        assert_eq!(set.flat_len(), 9);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a length mismatch names the offending field.
    //
    // Given
    // -----
    // - `b` one entry shorter than `a`.
    //
    // Expect
    // ------
    // - `LengthMismatch { field: "b", expected: 2, actual: 1 }`.
    fn item_params_rejects_length_mismatch() {
        let result = ItemParams::new(array![1.0, 1.0], array![0.0], array![0.2, 0.2]);
        assert_eq!(result.unwrap_err(), ParamError::LengthMismatch {
            field: "b",
            expected: 2,
            actual: 1
        });
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-finite entry names the field and index.
    //
    // Given
    // -----
    // - A NaN in `c` at index 1.
    //
    // Expect
    // ------
    // - `NonFiniteParam { field: "c", index: 1, .. }`.
    fn item_params_rejects_non_finite_entry() {
        let result = ItemParams::new(array![1.0, 1.0], array![0.0, 0.0], array![0.2, f64::NAN]);
        match result.unwrap_err() {
            ParamError::NonFiniteParam { field: "c", index: 1, value } => assert!(value.is_nan()),
            other => panic!("expected NonFiniteParam in c, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure empty blocks are rejected by both constructors.
    //
    // Given
    // -----
    // - Zero-length item blocks, then a zero-length theta.
    //
    // Expect
    // ------
    // - `EmptyParams` from each.
    fn constructors_reject_empty_blocks() {
        let items = ItemParams::new(array![], array![], array![]);
        assert_eq!(items.unwrap_err(), ParamError::EmptyParams);

        let items = ItemParams::new(array![1.0], array![0.0], array![0.2]).unwrap();
        let set = ParamSet::new(items, array![]);
        assert_eq!(set.unwrap_err(), ParamError::EmptyParams);
    }

    #[test]
    // Purpose
    // -------
    // Verify the canonical starting point holds the fixed values.
    //
    // Given
    // -----
    // - `init_3pl(3, 2)`.
    //
    // Expect
    // ------
    // - `a = 1`, `b = 0`, `c = 0.2` per item; `theta = 0` per student.
    fn init_3pl_uses_fixed_starting_values() {
        let set = ParamSet::init_3pl(3, 2).unwrap();
        assert_eq!(set.items.a, array![1.0, 1.0]);
        assert_eq!(set.items.b, array![0.0, 0.0]);
        assert_eq!(set.items.c, array![0.2, 0.2]);
        assert_eq!(set.theta, array![0.0, 0.0, 0.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the flat round-trip preserves every block exactly.
    //
    // Given
    // -----
    // - The small two-item, three-student set.
    //
    // Expect
    // ------
    // - `from_flat(to_flat())` equals the original bit-for-bit.
    fn flat_round_trip_is_exact() {
        let set = small_set();
        let flat = set.to_flat();
        assert_eq!(flat.len(), set.flat_len());

        let rebuilt = ParamSet::from_flat(&flat, set.n_students(), set.n_items()).unwrap();
        assert_eq!(rebuilt, set);
    }

    #[test]
    // Purpose
    // -------
    // Verify `split_flat` views land on the expected block boundaries.
    //
    // Given
    // -----
    // - A hand-built flat vector for 1 student and 2 items.
    //
    // Expect
    // ------
    // - Views `[a | b | c | theta]` in declaration order.
    fn split_flat_respects_layout() {
        let flat = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let blocks = split_flat(&flat, 1, 2).unwrap();
        assert_eq!(blocks.a, array![1.0, 2.0]);
        assert_eq!(blocks.b, array![3.0, 4.0]);
        assert_eq!(blocks.c, array![5.0, 6.0]);
        assert_eq!(blocks.theta, array![7.0]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a wrong-length flat vector is rejected with both lengths.
    //
    // Given
    // -----
    // - A 6-element vector where 7 are required.
    //
    // Expect
    // ------
    // - `FlatLengthMismatch { expected: 7, actual: 6 }`.
    fn from_flat_rejects_wrong_length() {
        let flat = Array1::<f64>::zeros(6);
        let result = ParamSet::from_flat(&flat, 1, 2);
        assert_eq!(result.unwrap_err(), ParamError::FlatLengthMismatch {
            expected: 7,
            actual: 6
        });
    }
}
