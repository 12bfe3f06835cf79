//! irt_calibrate — 3PL item-response calibration for binary exam data.
//!
//! Purpose
//! -------
//! Estimate item parameters (discrimination, difficulty, guessing) and
//! student abilities from a 0/1 response matrix by maximizing the mean
//! Bernoulli log-likelihood of the three-parameter logistic model, and
//! turn the fitted parameters into expected scores.
//!
//! Key behaviors
//! -------------
//! - Joint calibration of all `3M + N` parameters with a fixed-budget
//!   Adam optimizer over analytic gradients (`irt::models::ThreePlModel`).
//! - Ability-only re-estimation against a frozen item bank
//!   (`irt::models::AbilityModel`).
//! - Expected scores and 0–1000 scaled points from fitted parameters
//!   (`irt::core::scoring`).
//! - CSV response-matrix and JSON parameter-bundle persistence
//!   (`storage`), plus a seeded synthetic-exam generator (`simulate`).
//!
//! Conventions
//! -----------
//! - Response matrices are student-major: row `i` is student `i`, column
//!   `j` is item `j`.
//! - Flat parameter vectors are laid out `[a | b | c | theta]`; see
//!   `irt::core::params` for the packing rules.
//! - All log-likelihoods are means over cells, so values are comparable
//!   across matrix sizes.
//!
//! Downstream usage
//! ----------------
//! - Library callers work through `irt::prelude` and `storage`.
//! - The `irt_calibrate` binary wraps the same APIs behind `fit`,
//!   `score`, and `simulate` subcommands.

pub mod irt;
pub mod optimization;
pub mod simulate;
pub mod storage;
