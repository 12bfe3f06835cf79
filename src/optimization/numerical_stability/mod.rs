//! numerical_stability — numerically robust scalar transformations.
//!
//! Purpose
//! -------
//! Collect the small numeric transforms that keep likelihood evaluation
//! well-defined at extreme parameter values: a logistic function that
//! saturates cleanly in both tails without overflowing, and the unit-interval
//! clamp applied to guessing floors before every use. Centralizing them here
//! lets the probability and optimizer layers assume well-conditioned `f64`
//! arithmetic.
//!
//! Key behaviors
//! -------------
//! - [`transformations::safe_sigmoid`] never overflows and never returns NaN
//!   for finite input; its tails reach exactly 0.0 and 1.0.
//! - [`transformations::clamp_unit`] restricts a raw parameter to [0, 1]
//!   without mutating the stored value.
//!
//! Conventions
//! -----------
//! - All helpers are pure scalar `f64` functions; callers vectorize over
//!   arrays themselves.
//! - This module never logs and never allocates.
pub mod transformations;

pub use transformations::{clamp_unit, safe_sigmoid};
