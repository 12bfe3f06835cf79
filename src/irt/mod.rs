//! irt — 3PL estimation stack: core numerics, models, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive 3PL Item Response Theory layer that bundles the
//! validated data and parameter types, the probability/likelihood numerics,
//! model-level fitting and scoring, and shared error types under a single
//! namespace. This is the surface the storage and CLI layers depend on.
//!
//! Key behaviors
//! -------------
//! - Collect core numerical and structural building blocks in [`core`]:
//!   the response container, parameter containers with the flat optimizer
//!   layout, the clamped 3PL probability kernel, the mean Bernoulli
//!   log-likelihood with analytic gradients, fit configuration, and the
//!   0–1000 score scale.
//! - Expose the user-facing estimators in [`models`]: [`ThreePlModel`] for
//!   joint calibration and [`AbilityModel`] for frozen-item ability refits.
//! - Centralize IRT-specific error types in [`errors`] (`IrtError`,
//!   `ParamError`, and the `IrtResult` / `ParamResult` aliases).
//!
//! Invariants & assumptions
//! ------------------------
//! - Response data are carried in validated [`ResponseMatrix`] instances:
//!   non-empty with every cell exactly 0 or 1.
//! - The flat optimizer layout is `[a | b | c | theta]` with length
//!   `3 * n_items + n_students`; all parameters are unconstrained during
//!   optimization and only the guessing block is clamped, at evaluation.
//! - Fits are deterministic: the starting point is fixed (`a = 1`, `b = 0`,
//!   `c = 0.2`, `theta = 0`), the iteration budget is exact, and no step
//!   depends on ambient state.
//! - Neither theta nor b is anchored during fitting, so the latent scale is
//!   set only by the initialization; parameter estimates are comparable
//!   within one fit, not across refits on different data.
//!
//! Conventions
//! -----------
//! - Rows are students, columns are items; indexing is 0-based.
//! - This layer performs no I/O; progress reporting happens inside the
//!   optimizer via `tracing`, and persistence lives in
//!   [`storage`](crate::storage).
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Construct a [`ResponseMatrix`] (CSV reader, simulator, or tests).
//!   2. Build [`FitOptions`] (optimizer budget + likelihood epsilon).
//!   3. Fit via [`ThreePlModel::fit`] and persist `fitted_params` as a
//!      bundle.
//!   4. Score via [`expected_scores`] / [`scale_scores`], either on the
//!      fitted abilities or on an [`AbilityModel`] refit for new students.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover data/parameter validation, probability
//!   properties, and gradient agreement with finite differences; [`models`]
//!   covers trait conformance and short fits. Integration tests exercise
//!   recovery, determinism, and the degenerate all-zero/all-one matrices.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the everyday types most users need. Lower-level pieces (the
// flat-layout helpers, gradient kernels) remain under their submodules.

pub use self::core::{
    expected_scores, scale_scores, FitOptions, ItemParams, ParamSet, ResponseMatrix,
};

pub use self::errors::{IrtError, IrtResult, ParamError, ParamResult};

pub use self::models::{AbilityModel, ThreePlModel};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use irt_calibrate::irt::prelude::*;
//
// to import the main estimation surface in a single line.

pub mod prelude {
    pub use super::{
        expected_scores, scale_scores, AbilityModel, FitOptions, IrtError, IrtResult, ItemParams,
        ParamError, ParamResult, ParamSet, ResponseMatrix, ThreePlModel,
    };
}
