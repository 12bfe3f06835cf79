//! optimization — Adam MLE stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting, combining a
//! hand-rolled Adam log-likelihood maximizer, numerically stable elementwise
//! transforms, and a single error/result surface. Callers implement a
//! log-likelihood, choose a learning rate and iteration budget, and obtain
//! fitted parameters and diagnostics without touching loop internals.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   ([`adam`]), including configuration of step sizes and moment decay.
//! - Supply shared numerical primitives ([`numerical_stability`]) for
//!   overflow-safe sigmoids and unit-interval clamping used throughout the
//!   model layer.
//! - Normalize configuration issues, numerical failures, and model errors
//!   into a single enum ([`errors::OptError`]) with a common result alias
//!   (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer operates on a flat unconstrained parameter vector `θ` and
//!   assumes inputs are finite once validation has passed; invalid states
//!   are reported as `OptError`, not panics.
//! - Log-likelihood implementations treat domain violations (e.g., shape
//!   mismatches, non-binary responses) as recoverable errors surfaced
//!   through the optimization layer.
//! - Fits are deterministic: a fixed iteration budget and no data-dependent
//!   control flow mean identical inputs give bit-identical outputs.
//!
//! Conventions
//! -----------
//! - The solver conceptually maximizes a log-likelihood `ℓ(θ)` by descending
//!   an internal cost `c(θ) = -ℓ(θ)`; user-facing APIs and outcomes are
//!   expressed in terms of `ℓ`.
//! - Parameters and gradients use `ndarray`-based aliases ([`adam::Theta`],
//!   [`adam::Grad`]); any mapping between the flat vector and structured
//!   model parameters is handled by the model layer.
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see model-specific error enums.
//! - Progress reporting goes through `tracing`; this layer performs no other
//!   I/O.
//!
//! Downstream usage
//! ----------------
//! - Model types implement [`adam::LogLikelihood`] and call
//!   [`adam::maximize`] with a parameter guess, data payload, and
//!   [`adam::AdamOptions`] to obtain an [`adam::OptimOutcome`].
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`.

pub mod adam;
pub mod errors;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use irt_calibrate::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::adam::{maximize, AdamOptions, LogLikelihood, OptimOutcome};
    pub use super::errors::{OptError, OptResult};
    pub use super::numerical_stability::{clamp_unit, safe_sigmoid};
}
