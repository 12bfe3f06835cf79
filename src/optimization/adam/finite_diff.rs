//! Finite-difference fallback for objectives without an analytic gradient.
//!
//! The iteration loop descends on the cost `c(θ) = -ℓ(θ)`. When
//! [`LogLikelihood::grad`] reports `GradientNotImplemented`, the loop calls
//! [`cost_fd_grad`], which differences the **cost** closure directly, so no
//! sign flip is needed in this branch. Central differences are tried first;
//! if any cost evaluation failed mid-stencil or the result fails validation,
//! the routine retries once with forward differences before giving up.
use std::cell::RefCell;

use crate::optimization::{
    adam::{
        traits::LogLikelihood,
        types::{Grad, Theta},
        validation::validate_grad,
    },
    errors::{OptError, OptResult},
};
use finitediff::FiniteDiff;

/// Compute a finite-difference gradient of the cost `-ℓ` at `theta`.
///
/// The FD closure must return `f64`, so errors raised by `value` cannot
/// propagate through `?`; the first one is captured in a `RefCell` slot and
/// the closure returns NaN, which the post-FD checks turn back into a real
/// error.
///
/// # Errors
/// - Propagates the first error raised by `value` during stencil
///   evaluations.
/// - Returns validation errors if the differenced gradient has the wrong
///   dimension or non-finite entries after both attempts.
pub fn cost_fd_grad<F: LogLikelihood>(
    f: &F, theta: &Theta, data: &F::Data, dim: usize,
) -> OptResult<Grad> {
    let closure_err: RefCell<Option<OptError>> = RefCell::new(None);
    let cost_func = |theta: &Theta| -> f64 {
        match f.value(theta, data) {
            Ok(val) => -val,
            Err(e) => {
                let mut slot = closure_err.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                f64::NAN
            }
        }
    };
    let fd_grad = theta.central_diff(&cost_func);
    if closure_err.borrow().is_some() {
        return run_fd_retry(theta, &cost_func, &closure_err, dim);
    }
    match validate_grad(&fd_grad, dim) {
        Ok(()) => Ok(fd_grad),
        Err(_) => run_fd_retry(theta, &cost_func, &closure_err, dim),
    }
}

/// Forward-difference retry with error capture.
///
/// Clears the capture slot, differences `func` with forward steps, then
/// surfaces any captured error before validating the result.
///
/// # Errors
/// Returns any error captured during evaluation of `func`, or a validation
/// error for the resulting gradient.
fn run_fd_retry<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<OptError>>, dim: usize,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}
