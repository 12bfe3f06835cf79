//! core — shared 3PL data, parameters, likelihood, and scoring.
//!
//! Purpose
//! -------
//! Collect the core building blocks for 3PL IRT estimation: the validated
//! response container, parameter shapes and the flat optimizer layout, the
//! probability kernel, the mean Bernoulli log-likelihood with its analytic
//! gradients, fit configuration, and score reporting. The model layer builds
//! on top of these primitives.
//!
//! Key behaviors
//! -------------
//! - Define the validated data container ([`ResponseMatrix`]) and parameter
//!   containers ([`ItemParams`], [`ParamSet`]) with the flat
//!   `[a | b | c | theta]` mapping ([`split_flat`], [`ParamSet::to_flat`],
//!   [`ParamSet::from_flat`]).
//! - Implement the 3PL probability kernel ([`p_3pl`],
//!   [`probability_matrix`], [`probabilities`]) with the guessing floor
//!   clamped to [0, 1] at every evaluation.
//! - Evaluate the mean log-likelihood ([`mean_loglik`]) and its gradients
//!   ([`loglik_grad`], [`loglik_grad_theta`]) in single fused passes over
//!   the grid.
//! - Carry fit configuration ([`FitOptions`]) and map fitted parameters to
//!   reports ([`expected_scores`], [`scale_scores`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Response entries are exactly 0 or 1 once a [`ResponseMatrix`] exists;
//!   likelihood code does not re-validate cells.
//! - Parameter blocks are non-empty, finite, and consistently sized once
//!   constructed; the raw guessing block may leave [0, 1] during
//!   optimization and is clamped at evaluation only.
//! - Shapes are checked at model boundaries (`check`), so grid passes here
//!   may assume `(n_students, n_items)` consistency.
//!
//! Conventions
//! -----------
//! - Rows are students, columns are items; indexing is 0-based.
//! - The flat layout order is fixed: `[a | b | c | theta]`, length
//!   `3 * n_items + n_students`.
//! - This module avoids I/O and logging; it operates purely on `ndarray`
//!   containers and scalar values. Error conditions are reported via
//!   `IrtResult` / `ParamResult`.
//!
//! Downstream usage
//! ----------------
//! - [`models`](crate::irt::models) implements the optimizer-facing
//!   `LogLikelihood` trait on top of [`split_flat`], [`mean_loglik`], and
//!   the gradient functions.
//! - The storage and CLI layers construct [`ResponseMatrix`] values and
//!   consume [`ParamSet`] / score vectors; they never touch the flat layout
//!   directly.

pub mod data;
pub mod likelihood;
pub mod options;
pub mod params;
pub mod probability;
pub mod scoring;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::ResponseMatrix;
pub use self::likelihood::{loglik_grad, loglik_grad_theta, mean_loglik, DEFAULT_LIKELIHOOD_EPS};
pub use self::options::FitOptions;
pub use self::params::{split_flat, FlatBlocks, ItemParams, ParamSet};
pub use self::probability::{p_3pl, probabilities, probability_matrix};
pub use self::scoring::{expected_scores, scale_scores};
