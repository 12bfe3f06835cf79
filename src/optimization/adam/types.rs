//! Shared type aliases and default constants for the Adam optimizer.
//!
//! The aliases keep signatures across the optimizer readable and make the
//! flat-parameter convention explicit: models pack every parameter block
//! into one `Theta` vector, and gradients always come back in the same
//! layout.
use ndarray::Array1;

/// Flat parameter vector in optimizer space.
pub type Theta = Array1<f64>;

/// Gradient with respect to a flat parameter vector.
pub type Grad = Array1<f64>;

/// Scalar objective value.
pub type Cost = f64;

/// Default learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Default iteration budget.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Default exponential decay rate for the first-moment estimate.
pub const DEFAULT_BETA1: f64 = 0.9;

/// Default exponential decay rate for the second-moment estimate.
pub const DEFAULT_BETA2: f64 = 0.999;

/// Default denominator epsilon in the parameter update.
pub const DEFAULT_EPSILON: f64 = 1e-8;
