//! Mean Bernoulli log-likelihood and its analytic gradients.
//!
//! Purpose
//! -------
//! Evaluate the objective the estimator maximizes,
//!
//! ```text
//! ℓ = mean over all (i, j) of  y·ln(P + ε) + (1 - y)·ln(1 - P + ε)
//! ```
//!
//! with `P = c̃ + (1 - c̃)·s`, `c̃ = clamp(c, 0, 1)`, and
//! `s = sigmoid(a·(θ - b))`, plus its gradient with respect to every
//! parameter block.
//!
//! Key behaviors
//! -------------
//! - `ε` is added inside both logs on every cell, so probabilities of
//!   exactly 0 or 1 never produce `-inf`.
//! - Writing `G = (1/NM)·[y/(P + ε) - (1 - y)/(1 - P + ε)]` and
//!   `w = G·(1 - c̃)·s·(1 - s)`, the per-block gradients are
//!
//! ```text
//! ∂ℓ/∂a_j = Σ_i w·(θ_i - b_j)      ∂ℓ/∂b_j = -a_j·Σ_i w
//! ∂ℓ/∂c_j = Σ_i G·(1 - s)·[0 ≤ c_j ≤ 1]   ∂ℓ/∂θ_i = Σ_j w·a_j
//! ```
//!
//!   where the bracket zeroes the guessing gradient while the raw `c_j`
//!   sits outside the clamp's active range.
//! - All functions make a single fused pass over the `(N, M)` grid via
//!   `ndarray::Zip`; nothing in this module allocates per cell.
//!
//! Downstream usage
//! ----------------
//! - [`ThreePlModel`](crate::irt::models::three_pl::ThreePlModel) uses
//!   [`mean_loglik`] and [`loglik_grad`] for the joint fit;
//!   [`AbilityModel`](crate::irt::models::three_pl::AbilityModel) uses
//!   [`loglik_grad_theta`] for the frozen-item refit.
//!
//! Testing notes
//! -------------
//! - The analytic gradient is cross-checked against `finitediff` central
//!   differences on a small asymmetric problem.
use crate::irt::core::params::{FlatBlocks, ItemParams};
use crate::optimization::numerical_stability::{clamp_unit, safe_sigmoid};
use ndarray::{s, Array1, Array2, ArrayView1, Zip};

/// Default stabilizer added inside both logs of the likelihood.
pub const DEFAULT_LIKELIHOOD_EPS: f64 = 1e-9;

/// Per-cell intermediate quantities shared by all gradient blocks.
struct CellGrads {
    /// Unscaled `∂ℓ/∂P` for the cell.
    g: f64,
    /// `g·(1 - c̃)·s·(1 - s)`, the chain factor for `a`, `b`, and `theta`.
    w: f64,
    /// `1 - s`, reused by the guessing gradient.
    one_minus_s: f64,
}

fn cell_grads(y: f64, theta: f64, a: f64, b: f64, c: f64, eps: f64) -> CellGrads {
    let floor = clamp_unit(c);
    let s = safe_sigmoid(a * (theta - b));
    let p = floor + (1.0 - floor) * s;
    let g = y / (p + eps) - (1.0 - y) / (1.0 - p + eps);
    CellGrads { g, w: g * (1.0 - floor) * s * (1.0 - s), one_minus_s: 1.0 - s }
}

/// 1 while the raw guessing value sits in the clamp's active range.
fn guess_mask(c: f64) -> f64 {
    if (0.0..=1.0).contains(&c) {
        1.0
    } else {
        0.0
    }
}

/// Mean Bernoulli log-likelihood of `responses` under `probs`.
///
/// Parameters
/// ----------
/// - `responses`: observed 0/1 matrix, shape `(N, M)`.
/// - `probs`: model probabilities for the same grid.
/// - `eps`: stabilizer added inside both logs.
///
/// Returns
/// -------
/// The mean over all `N·M` cells; at most ~`ln(1 + eps)` and unbounded
/// below.
///
/// Panics
/// ------
/// - If the two matrices differ in shape. Model `check` methods guard
///   every call site.
pub fn mean_loglik(responses: &Array2<f64>, probs: &Array2<f64>, eps: f64) -> f64 {
    let mut total = 0.0;
    Zip::from(responses).and(probs).for_each(|&y, &p| {
        total += y * (p + eps).ln() + (1.0 - y) * (1.0 - p + eps).ln();
    });
    total / responses.len() as f64
}

/// Gradient of the mean log-likelihood with respect to the full flat
/// layout `[a | b | c | theta]`.
///
/// Parameters
/// ----------
/// - `responses`: observed 0/1 matrix, shape `(N, M)`.
/// - `blocks`: current parameter views; `theta` length `N`, item blocks
///   length `M`.
/// - `eps`: the same stabilizer used by [`mean_loglik`].
///
/// Returns
/// -------
/// `Array1<f64>` of length `3M + N` in block order.
pub fn loglik_grad(responses: &Array2<f64>, blocks: FlatBlocks<'_>, eps: f64) -> Array1<f64> {
    let (n, m) = responses.dim();
    let mut da = Array1::<f64>::zeros(m);
    let mut db = Array1::<f64>::zeros(m);
    let mut dc = Array1::<f64>::zeros(m);
    let mut dtheta = Array1::<f64>::zeros(n);

    Zip::indexed(responses).for_each(|(i, j), &y| {
        let cell = cell_grads(y, blocks.theta[i], blocks.a[j], blocks.b[j], blocks.c[j], eps);
        da[j] += cell.w * (blocks.theta[i] - blocks.b[j]);
        db[j] -= blocks.a[j] * cell.w;
        dc[j] += cell.g * cell.one_minus_s * guess_mask(blocks.c[j]);
        dtheta[i] += cell.w * blocks.a[j];
    });

    let scale = 1.0 / (n as f64 * m as f64);
    let mut grad = Array1::<f64>::zeros(3 * m + n);
    grad.slice_mut(s![..m]).assign(&(da * scale));
    grad.slice_mut(s![m..2 * m]).assign(&(db * scale));
    grad.slice_mut(s![2 * m..3 * m]).assign(&(dc * scale));
    grad.slice_mut(s![3 * m..]).assign(&(dtheta * scale));
    grad
}

/// Ability-only gradient for a frozen item block.
///
/// Same arithmetic as the `theta` block of [`loglik_grad`], without
/// accumulating the item blocks. Returns `Array1<f64>` of length `N`.
pub fn loglik_grad_theta(
    responses: &Array2<f64>, items: &ItemParams, theta: ArrayView1<'_, f64>, eps: f64,
) -> Array1<f64> {
    let (n, m) = responses.dim();
    let mut dtheta = Array1::<f64>::zeros(n);

    Zip::indexed(responses).for_each(|(i, j), &y| {
        let cell = cell_grads(y, theta[i], items.a[j], items.b[j], items.c[j], eps);
        dtheta[i] += cell.w * items.a[j];
    });

    dtheta * (1.0 / (n as f64 * m as f64))
}
