//! User-facing contracts of the Adam optimizer: the objective trait, the
//! validated option set, and the validated outcome.
//!
//! Sign convention
//! ---------------
//! Implementors supply a log-likelihood `ℓ(θ)` to **maximize**. Internally
//! the loop descends on the cost `c(θ) = -ℓ(θ)`; analytic gradients returned
//! by [`LogLikelihood::grad`] are gradients of `ℓ`, and the loop negates
//! them. Callers never deal in cost space.
use crate::optimization::{
    adam::{
        types::{
            Cost, Grad, Theta, DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_EPSILON, DEFAULT_ITERATIONS,
            DEFAULT_LEARNING_RATE,
        },
        validation::{
            validate_theta_hat, validate_value, verify_decay_rate, verify_epsilon,
            verify_iterations, verify_learning_rate,
        },
    },
    errors::{OptError, OptResult},
};

/// A log-likelihood objective over a flat parameter vector.
///
/// `Data` carries the observations the objective is evaluated against; it is
/// passed through the optimizer untouched, so one model instance can be fit
/// against several data sets.
///
/// Required methods:
/// - `value`: evaluate `ℓ(θ)` for the given data.
/// - `check`: validate a starting point and data before the run (shapes,
///   dimension bookkeeping). Called once by [`crate::optimization::adam::maximize`].
///
/// Provided method:
/// - `grad`: analytic gradient of `ℓ`. The default returns
///   [`OptError::GradientNotImplemented`], which makes the loop fall back to
///   finite differences of the cost. Implement it whenever a closed form
///   exists; finite differences cost one objective evaluation per parameter
///   per iteration.
pub trait LogLikelihood {
    type Data;

    /// Evaluate the log-likelihood `ℓ(θ)` on `data`.
    ///
    /// # Errors
    /// Implementations surface their own shape or parameter errors.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;

    /// Validate a starting point and data set before optimization.
    ///
    /// # Errors
    /// Implementations reject mismatched dimensions or malformed data.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    /// Analytic gradient `∇ℓ(θ)`, if implemented.
    ///
    /// # Errors
    /// The default implementation returns
    /// [`OptError::GradientNotImplemented`], which selects the
    /// finite-difference fallback.
    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }
}

/// Validated configuration for an Adam run.
///
/// Fields follow the conventional first-order adaptive update: per-parameter
/// exponential moving averages of the gradient (`beta1`) and its square
/// (`beta2`), both bias-corrected, with `epsilon` guarding the division in
/// the step. The loop always runs exactly `iterations` steps; there is no
/// convergence-based early stop, so estimate quality is bounded by the
/// budget the caller supplies.
#[derive(Debug, Clone, PartialEq)]
pub struct AdamOptions {
    /// Step size applied to the bias-corrected update direction.
    pub learning_rate: f64,
    /// Fixed number of iterations to run.
    pub iterations: usize,
    /// Decay rate of the first-moment (gradient) average.
    pub beta1: f64,
    /// Decay rate of the second-moment (squared gradient) average.
    pub beta2: f64,
    /// Denominator guard in the parameter update.
    pub epsilon: f64,
}

impl AdamOptions {
    /// Construct options with the given step size and budget, keeping the
    /// conventional decay rates and epsilon.
    ///
    /// # Errors
    /// - [`OptError::InvalidLearningRate`] if `learning_rate` is non-finite
    ///   or not positive.
    /// - [`OptError::InvalidIterations`] if `iterations` is zero.
    pub fn new(learning_rate: f64, iterations: usize) -> OptResult<AdamOptions> {
        AdamOptions::with_decay(
            learning_rate,
            iterations,
            DEFAULT_BETA1,
            DEFAULT_BETA2,
            DEFAULT_EPSILON,
        )
    }

    /// Construct options with full control over the decay rates and epsilon.
    ///
    /// # Errors
    /// - [`OptError::InvalidLearningRate`] if `learning_rate` is non-finite
    ///   or not positive.
    /// - [`OptError::InvalidIterations`] if `iterations` is zero.
    /// - [`OptError::InvalidDecayRate`] if either decay rate is non-finite
    ///   or outside [0, 1).
    /// - [`OptError::InvalidEpsilon`] if `epsilon` is non-finite or not
    ///   positive.
    pub fn with_decay(
        learning_rate: f64, iterations: usize, beta1: f64, beta2: f64, epsilon: f64,
    ) -> OptResult<AdamOptions> {
        verify_learning_rate(learning_rate)?;
        verify_iterations(iterations)?;
        verify_decay_rate("beta1", beta1)?;
        verify_decay_rate("beta2", beta2)?;
        verify_epsilon(epsilon)?;
        Ok(AdamOptions { learning_rate, iterations, beta1, beta2, epsilon })
    }
}

impl Default for AdamOptions {
    /// Conventional defaults: learning rate 0.01, 100 iterations,
    /// β₁ = 0.9, β₂ = 0.999, ε = 1e-8.
    fn default() -> Self {
        AdamOptions {
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            beta1: DEFAULT_BETA1,
            beta2: DEFAULT_BETA2,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Validated result of an optimizer run.
///
/// `value` is the log-likelihood `ℓ(θ̂)` at the final estimate, in the
/// caller's maximization convention (not the internal cost).
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    /// Final flat parameter estimate.
    pub theta_hat: Theta,
    /// Log-likelihood at `theta_hat`.
    pub value: Cost,
    /// Number of iterations actually run (always the configured budget).
    pub iterations: usize,
}

impl OptimOutcome {
    /// Validate and package a finished run.
    ///
    /// # Errors
    /// - [`OptError::InvalidThetaHat`] on the first non-finite estimate
    ///   element.
    /// - [`OptError::NonFiniteValue`] if `value` is NaN or infinite.
    pub fn new(theta_hat: Theta, value: Cost, iterations: usize) -> OptResult<OptimOutcome> {
        validate_theta_hat(&theta_hat)?;
        validate_value(value)?;
        Ok(OptimOutcome { theta_hat, value, iterations })
    }
}
