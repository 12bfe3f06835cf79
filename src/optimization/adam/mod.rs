//! adam — fixed-budget Adam maximizer for log-likelihoods.
//!
//! Purpose
//! -------
//! Provide a small, dependency-light optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)`. Callers implement a single trait,
//! [`LogLikelihood`], and invoke [`maximize`] to run Adam with a configurable
//! learning rate, iteration budget, and moment decay rates.
//!
//! Key behaviors
//! -------------
//! - Treat user-supplied log-likelihoods `ℓ(θ)` as costs `c(θ) = -ℓ(θ)`
//!   internally; gradients are negated at the same boundary.
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates inputs with [`LogLikelihood::check`],
//!   - executes the loop via [`run::run_adam`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Fall back to finite differences in [`finite_diff`] when a model does
//!   not implement analytic gradients, with post-hoc validation and error
//!   capture.
//! - Centralize optimizer configuration ([`AdamOptions`]) and validation
//!   logic ([`validation`]) so the loop can assume sane, finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** `ℓ(θ)` by descending `c(θ) = -ℓ(θ)`;
//!   user code implements `ℓ(θ)` and `∇ℓ(θ)` (when available), **never** the
//!   cost directly.
//! - [`LogLikelihood::value`] and [`LogLikelihood::grad`] must treat invalid
//!   inputs as recoverable [`OptError`](crate::optimization::errors::OptError)
//!   values, not panics.
//! - Exactly `iterations` steps run per fit; there is no convergence-based
//!   early stop, so identical inputs give bit-identical trajectories.
//! - [`AdamOptions`] is validated on construction and treated as internally
//!   consistent by the loop.
//!
//! Conventions
//! -----------
//! - Parameters live in a flat unconstrained vector as [`Theta`]
//!   (`Array1<f64>`). Any mapping from constrained → unconstrained space
//!   happens in the model layer.
//! - [`OptimOutcome::value`] is expressed in terms of the log-likelihood
//!   `ℓ`, never the internal cost.
//! - Errors bubble up as [`OptResult<T>`](crate::optimization::errors::OptResult);
//!   this module and its children never intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - Model types implement [`LogLikelihood`], then call [`maximize`] with a
//!   model instance, an initial [`Theta`], a data payload, and
//!   [`AdamOptions`].
//! - Front-ends (the CLI) interact only with the re-exported surface:
//!   [`maximize`], [`LogLikelihood`], [`AdamOptions`], [`OptimOutcome`],
//!   plus numeric aliases from [`types`].

pub mod api;
pub mod finite_diff;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{AdamOptions, LogLikelihood, OptimOutcome};
pub use self::types::{
    Cost, Grad, Theta, DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_EPSILON, DEFAULT_ITERATIONS,
    DEFAULT_LEARNING_RATE,
};
