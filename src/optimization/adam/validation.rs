//! Validation helpers for optimizer options, gradients, and outcomes.
//!
//! Every validator returns `OptResult<()>` (or the validated value) and
//! reports the first offending entry with its index, so configuration and
//! model bugs surface before or during the run instead of as NaN estimates
//! afterwards.
use crate::optimization::{
    adam::types::{Grad, Theta},
    errors::{OptError, OptResult},
};

/// Validate a learning rate.
///
/// # Errors
/// Returns [`OptError::InvalidLearningRate`] if `value` is non-finite or
/// not strictly positive.
pub fn verify_learning_rate(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidLearningRate { value, reason: "must be finite" });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidLearningRate { value, reason: "must be positive" });
    }
    Ok(())
}

/// Validate an iteration budget.
///
/// # Errors
/// Returns [`OptError::InvalidIterations`] if `iterations` is zero.
pub fn verify_iterations(iterations: usize) -> OptResult<()> {
    if iterations == 0 {
        return Err(OptError::InvalidIterations { iterations, reason: "must be at least 1" });
    }
    Ok(())
}

/// Validate an exponential moment decay rate (β₁ or β₂).
///
/// `name` labels the offending field in the error.
///
/// # Errors
/// Returns [`OptError::InvalidDecayRate`] if `value` is non-finite or lies
/// outside [0, 1).
pub fn verify_decay_rate(name: &'static str, value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidDecayRate { name, value, reason: "must be finite" });
    }
    if !(0.0..1.0).contains(&value) {
        return Err(OptError::InvalidDecayRate { name, value, reason: "must lie in [0, 1)" });
    }
    Ok(())
}

/// Validate the denominator epsilon of the parameter update.
///
/// # Errors
/// Returns [`OptError::InvalidEpsilon`] if `value` is non-finite or not
/// strictly positive.
pub fn verify_epsilon(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidEpsilon { value, reason: "must be finite" });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidEpsilon { value, reason: "must be positive" });
    }
    Ok(())
}

/// Validate a gradient against the parameter dimension.
///
/// Checks the length first, then every element for finiteness, reporting
/// the first offending index.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if `grad.len() != dim`.
/// - [`OptError::InvalidGradient`] on the first non-finite element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient { index, value, reason: "must be finite" });
        }
    }
    Ok(())
}

/// Validate a final parameter estimate element-wise.
///
/// # Errors
/// Returns [`OptError::InvalidThetaHat`] on the first non-finite element.
pub fn validate_theta_hat(theta_hat: &Theta) -> OptResult<()> {
    for (index, &value) in theta_hat.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidThetaHat { index, value, reason: "must be finite" });
        }
    }
    Ok(())
}

/// Validate a final objective value.
///
/// # Errors
/// Returns [`OptError::NonFiniteValue`] if `value` is NaN or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteValue { value });
    }
    Ok(())
}
