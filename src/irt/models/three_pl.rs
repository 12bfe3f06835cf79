//! 3PL model: analytic log-likelihood and gradient.
//!
//! This module wires the 3PL likelihood to the `LogLikelihood` trait.
//! [`ThreePlModel`] estimates all four blocks jointly over the flat layout
//! `[a | b | c | theta]`; [`AbilityModel`] freezes a fitted item block and
//! re-estimates abilities only, for scoring students who were not part of
//! the original calibration.
//!
//! Key ideas:
//! - Parameters live in a single unconstrained flat vector; the guessing
//!   block is clamped to [0, 1] at probability evaluation rather than
//!   constrained in the optimizer.
//! - `value` runs one probability-grid pass plus the mean log-likelihood;
//!   `grad` runs one fused grid pass producing all blocks at once.
//! - Both models start from the fixed deterministic initialization
//!   (`a = 1`, `b = 0`, `c = 0.2`, `theta = 0`), so repeated fits on the
//!   same data reproduce identical trajectories.
use crate::{
    irt::{
        core::{
            data::ResponseMatrix,
            likelihood::{loglik_grad, loglik_grad_theta, mean_loglik},
            options::FitOptions,
            params::{split_flat, ItemParams, ParamSet, INIT_ABILITY},
            probability::probability_matrix,
        },
        errors::{IrtError, IrtResult},
    },
    optimization::{
        adam::{maximize, Cost, Grad, LogLikelihood, OptimOutcome, Theta},
        errors::{OptError, OptResult},
    },
};
use ndarray::Array1;

/// 3PL model fitting all item and ability parameters jointly.
///
/// Encapsulates the problem size, the fit configuration, and, after
/// [`fit`](ThreePlModel::fit), the optimizer outcome plus the structured
/// parameter estimate.
///
/// # Notes
/// - Implements [`LogLikelihood`] over the flat layout, so it plugs
///   directly into [`maximize`].
/// - The model is sized up front; `check` rejects any response matrix whose
///   shape disagrees.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreePlModel {
    /// Number of students (rows) the model is sized for.
    pub n_students: usize,
    /// Number of items (columns) the model is sized for.
    pub n_items: usize,
    /// Fit configuration.
    pub options: FitOptions,
    /// Fit results (populated after `fit`).
    pub results: Option<OptimOutcome>,
    /// Fitted parameters (populated after `fit`).
    pub fitted_params: Option<ParamSet>,
}

impl ThreePlModel {
    /// Construct an unfitted model for a `(n_students, n_items)` matrix.
    ///
    /// # Errors
    /// - [`IrtError::InvalidModelSize`] when either count is zero.
    pub fn new(n_students: usize, n_items: usize, options: FitOptions) -> IrtResult<ThreePlModel> {
        if n_students == 0 || n_items == 0 {
            return Err(IrtError::InvalidModelSize { n_students, n_items });
        }
        Ok(ThreePlModel { n_students, n_items, options, results: None, fitted_params: None })
    }

    /// Fit the 3PL model by maximum likelihood and cache the results.
    ///
    /// ## Steps
    /// 1. Build the deterministic starting point via [`ParamSet::init_3pl`]
    ///    and flatten it.
    /// 2. Run the Adam maximizer for the configured budget; the per-step
    ///    loss check aborts on any non-finite value.
    /// 3. Store the optimizer outcome in `self.results` and the validated
    ///    structured estimate in `self.fitted_params`.
    ///
    /// ## Errors
    /// - [`IrtError::OptimizationFailed`] carrying the optimizer's status
    ///   (shape mismatches surface here too, via `check`).
    /// - Parameter validation errors if the estimate fails to rebuild.
    pub fn fit(&mut self, data: &ResponseMatrix) -> IrtResult<()> {
        let theta0 = ParamSet::init_3pl(self.n_students, self.n_items)?.to_flat();
        self.results = Some(
            maximize(self, theta0, data, &self.options.adam)
                .map_err(|e| IrtError::OptimizationFailed { status: e.to_string() })?,
        );
        let theta_hat = &self.results.as_ref().unwrap().theta_hat;
        self.fitted_params = Some(ParamSet::from_flat(theta_hat, self.n_students, self.n_items)?);
        Ok(())
    }

    /// Borrow the fitted parameters.
    ///
    /// # Errors
    /// - [`IrtError::ModelNotFitted`] before a successful [`fit`](Self::fit).
    pub fn params(&self) -> IrtResult<&ParamSet> {
        self.fitted_params.as_ref().ok_or(IrtError::ModelNotFitted)
    }
}

impl LogLikelihood for ThreePlModel {
    type Data = ResponseMatrix;

    /// Mean log-likelihood of `data` at the flat parameter vector.
    ///
    /// # Errors
    /// - Flat-length mismatches from the block split.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        let blocks = split_flat(theta, self.n_students, self.n_items)?;
        let probs = probability_matrix(blocks.a, blocks.b, blocks.c, blocks.theta);
        Ok(mean_loglik(&data.responses, &probs, self.options.likelihood_eps))
    }

    /// Validate the response shape and the flat vector length.
    ///
    /// # Errors
    /// - [`OptError::DataDimsMismatch`] when `data` is not
    ///   `(n_students, n_items)`.
    /// - [`OptError::FlatLengthMismatch`] when `theta` is not
    ///   `3 * n_items + n_students` long.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        let expected = (self.n_students, self.n_items);
        let found = data.responses.dim();
        if found != expected {
            return Err(OptError::DataDimsMismatch { expected, found });
        }
        split_flat(theta, self.n_students, self.n_items)?;
        Ok(())
    }

    /// Analytic gradient of the mean log-likelihood for every block.
    ///
    /// One fused pass over the grid; returns length `3 * n_items +
    /// n_students` in block order.
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        let blocks = split_flat(theta, self.n_students, self.n_items)?;
        Ok(loglik_grad(&data.responses, blocks, self.options.likelihood_eps))
    }
}

/// Ability-only model over a frozen, already-calibrated item block.
///
/// Used to score students who were not part of the original fit: item
/// parameters come from a persisted bundle and only `theta` is estimated.
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityModel {
    /// Frozen item parameters.
    pub items: ItemParams,
    /// Fit configuration for the refit.
    pub options: FitOptions,
}

impl AbilityModel {
    /// Construct an ability model over validated item parameters.
    pub fn new(items: ItemParams, options: FitOptions) -> AbilityModel {
        AbilityModel { items, options }
    }

    /// Estimate abilities for `data` against the frozen items.
    ///
    /// Starts every student at `theta = 0` and maximizes the same mean
    /// log-likelihood with the item blocks held fixed. Returns a
    /// [`ParamSet`] pairing the frozen items with the refit abilities.
    ///
    /// ## Errors
    /// - [`IrtError::OptimizationFailed`] carrying the optimizer's status
    ///   (an item-count mismatch surfaces here, via `check`).
    pub fn fit(&self, data: &ResponseMatrix) -> IrtResult<ParamSet> {
        let theta0 = Array1::from_elem(data.n_students(), INIT_ABILITY);
        let outcome = maximize(self, theta0, data, &self.options.adam)
            .map_err(|e| IrtError::OptimizationFailed { status: e.to_string() })?;
        Ok(ParamSet::new(self.items.clone(), outcome.theta_hat)?)
    }
}

impl LogLikelihood for AbilityModel {
    type Data = ResponseMatrix;

    /// Mean log-likelihood of `data` at the ability vector.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        let probs = probability_matrix(
            self.items.a.view(),
            self.items.b.view(),
            self.items.c.view(),
            theta.view(),
        );
        Ok(mean_loglik(&data.responses, &probs, self.options.likelihood_eps))
    }

    /// Validate the item count and the ability vector length.
    ///
    /// # Errors
    /// - [`OptError::ItemCountMismatch`] when `data` has a different column
    ///   count than the frozen items.
    /// - [`OptError::FlatLengthMismatch`] when `theta` is not one ability
    ///   per student.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        if data.n_items() != self.items.n_items() {
            return Err(OptError::ItemCountMismatch {
                expected: self.items.n_items(),
                actual: data.n_items(),
            });
        }
        if theta.len() != data.n_students() {
            return Err(OptError::FlatLengthMismatch {
                expected: data.n_students(),
                actual: theta.len(),
            });
        }
        Ok(())
    }

    /// Ability-block gradient with the item blocks held fixed.
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        let eps = self.options.likelihood_eps;
        Ok(loglik_grad_theta(&data.responses, &self.items, theta.view(), eps))
    }
}
