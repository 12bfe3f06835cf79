//! The Adam iteration loop.
//!
//! Purpose
//! -------
//! Execute a fixed-budget, first-order adaptive descent on the cost
//! `c(θ) = -ℓ(θ)`: per-parameter exponential moving averages of the gradient
//! and its square, bias correction, and a guarded division in the step. The
//! loop is a plain synchronous `for` over iterations; all per-step work is
//! vectorized over the flat parameter vector.
//!
//! Key behaviors
//! -------------
//! - Exactly `opts.iterations` steps are run; there is no early stop.
//! - The loss `-ℓ(θ)` is evaluated and checked for finiteness at the top of
//!   every iteration; a non-finite loss aborts with the iteration number.
//! - Analytic gradients are validated and negated into cost space; when the
//!   objective does not implement `grad`, the loop falls back to finite
//!   differences of the cost.
//! - Progress is reported through `tracing` at iteration 1 and every
//!   `max(1, iterations / 10)` iterations thereafter.
use ndarray::{Array1, Zip};

use crate::optimization::{
    adam::{
        finite_diff::cost_fd_grad,
        traits::{AdamOptions, LogLikelihood, OptimOutcome},
        types::{Grad, Theta},
        validation::{validate_grad, validate_theta_hat, validate_value},
    },
    errors::{OptError, OptResult},
};

/// Run the Adam loop from `theta0` and package the validated outcome.
///
/// The caller (`maximize`) has already run the objective's `check`; this
/// function assumes shapes are consistent.
///
/// # Errors
/// - [`OptError::NonFiniteLoss`] if the loss is NaN or infinite at any
///   iteration, carrying that iteration number (1-based).
/// - Any error from `value`/`grad`, gradient validation, or the
///   finite-difference fallback.
/// - Outcome validation errors if the final estimate or value is
///   non-finite.
pub fn run_adam<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &AdamOptions,
) -> OptResult<OptimOutcome> {
    let dim = theta0.len();
    let mut theta = theta0;
    let mut first_moment = Array1::<f64>::zeros(dim);
    let mut second_moment = Array1::<f64>::zeros(dim);
    let report_every = (opts.iterations / 10).max(1);

    for iteration in 1..=opts.iterations {
        let loss = -f.value(&theta, data)?;
        if !loss.is_finite() {
            return Err(OptError::NonFiniteLoss { iteration, value: loss });
        }
        if iteration == 1 || iteration % report_every == 0 {
            tracing::info!(iteration, total = opts.iterations, loss, "fit progress");
        }

        let grad = eval_cost_grad(f, &theta, data, dim)?;

        Zip::from(&mut first_moment).and(&grad).for_each(|m, &g| {
            *m = opts.beta1 * *m + (1.0 - opts.beta1) * g;
        });
        Zip::from(&mut second_moment).and(&grad).for_each(|v, &g| {
            *v = opts.beta2 * *v + (1.0 - opts.beta2) * g * g;
        });

        let bias1 = 1.0 - opts.beta1.powi(iteration as i32);
        let bias2 = 1.0 - opts.beta2.powi(iteration as i32);
        Zip::from(&mut theta).and(&first_moment).and(&second_moment).for_each(|t, &m, &v| {
            let m_hat = m / bias1;
            let v_hat = v / bias2;
            *t -= opts.learning_rate * m_hat / (v_hat.sqrt() + opts.epsilon);
        });
    }

    let value = f.value(&theta, data)?;
    validate_value(value)?;
    validate_theta_hat(&theta)?;
    tracing::debug!(value, iterations = opts.iterations, "fit complete");
    OptimOutcome::new(theta, value, opts.iterations)
}

/// Evaluate the cost gradient `∇(-ℓ)` at `theta`.
///
/// Uses the analytic gradient when implemented (validated, then negated
/// into cost space); otherwise differences the cost directly.
///
/// # Errors
/// Propagates objective errors and gradient validation failures.
fn eval_cost_grad<F: LogLikelihood>(
    f: &F, theta: &Theta, data: &F::Data, dim: usize,
) -> OptResult<Grad> {
    match f.grad(theta, data) {
        Ok(g) => {
            validate_grad(&g, dim)?;
            Ok(-g)
        }
        Err(OptError::GradientNotImplemented) => cost_fd_grad(f, theta, data, dim),
        Err(e) => Err(e),
    }
}
