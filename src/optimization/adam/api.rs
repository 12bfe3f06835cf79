//! Public entry point for the Adam maximizer.
use crate::optimization::{
    adam::{
        run::run_adam,
        traits::{AdamOptions, LogLikelihood, OptimOutcome},
        types::Theta,
    },
    errors::OptResult,
};

/// Maximize `f` over `theta` starting from `theta0`.
///
/// Runs the objective's own `check` on the starting point and data, then
/// descends the cost `-ℓ(θ)` for the full iteration budget in `opts`.
///
/// Parameters
/// ----------
/// - `f`: The objective, exposing `value` and optionally an analytic
///   `grad`.
/// - `theta0`: Starting parameter vector; its length fixes the problem
///   dimension.
/// - `data`: Observations forwarded untouched to the objective.
/// - `opts`: Validated step size and iteration budget.
///
/// # Errors
/// - Whatever the objective's `check` reports for inconsistent inputs.
/// - [`crate::optimization::errors::OptError::NonFiniteLoss`] if the loss
///   leaves the finite range mid-run.
/// - Gradient validation and finite-difference failures from the loop.
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &AdamOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    run_adam(f, theta0, data, opts)
}
