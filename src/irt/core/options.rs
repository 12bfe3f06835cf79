//! Fit configuration for 3PL estimation.
//!
//! Purpose
//! -------
//! Bundle the optimizer configuration with the likelihood stabilizer in one
//! validated options type, so models receive a single internally consistent
//! configuration value.
//!
//! Key behaviors
//! -------------
//! - [`FitOptions::new`] validates the likelihood epsilon (finite, > 0);
//!   the embedded [`AdamOptions`] is validated by its own constructor.
//! - `Default` reproduces the canonical configuration: learning rate 0.01,
//!   100 iterations, and epsilon 1e-9.
//!
//! Downstream usage
//! ----------------
//! - Construct once at the CLI or API boundary and hand to
//!   [`ThreePlModel`](crate::irt::models::three_pl::ThreePlModel) /
//!   [`AbilityModel`](crate::irt::models::three_pl::AbilityModel).
use crate::irt::core::likelihood::DEFAULT_LIKELIHOOD_EPS;
use crate::irt::errors::{IrtError, IrtResult};
use crate::optimization::adam::AdamOptions;

/// `FitOptions` — validated configuration for one estimation run.
///
/// Fields
/// ------
/// - `adam`: [`AdamOptions`]
///   Step size, iteration budget, and moment decay for the maximizer.
/// - `likelihood_eps`: `f64`
///   Stabilizer added inside both logs of the likelihood; finite and > 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Optimizer configuration.
    pub adam: AdamOptions,
    /// Stabilizer added inside both likelihood logs.
    pub likelihood_eps: f64,
}

impl FitOptions {
    /// Construct validated [`FitOptions`].
    ///
    /// # Errors
    /// - `IrtError::InvalidEpsilon { value, reason }` when
    ///   `likelihood_eps` is NaN/±∞ or not strictly positive.
    pub fn new(adam: AdamOptions, likelihood_eps: f64) -> IrtResult<Self> {
        if !likelihood_eps.is_finite() {
            return Err(IrtError::InvalidEpsilon {
                value: likelihood_eps,
                reason: "must be finite",
            });
        }
        if likelihood_eps <= 0.0 {
            return Err(IrtError::InvalidEpsilon {
                value: likelihood_eps,
                reason: "must be > 0",
            });
        }
        Ok(FitOptions { adam, likelihood_eps })
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions { adam: AdamOptions::default(), likelihood_eps: DEFAULT_LIKELIHOOD_EPS }
    }
}
