//! Synthetic exam generation for demos and end-to-end tests.
//!
//! Draws a ground-truth parameter set from fixed sampling distributions,
//! then draws one Bernoulli response per student/item cell from the model
//! probabilities. Callers own the RNG, so a seeded [`rand::rngs::StdRng`]
//! reproduces the same exam bit for bit.
//!
//! Sampling distributions
//! ----------------------
//! - Abilities and difficulties: standard normal.
//! - Discriminations: log-normal with log-scale spread
//!   [`DISCRIMINATION_LOG_SD`], keeping them positive and near 1.
//! - Guessing rates: `Beta(5, 15)`, mean 0.25 with mass well inside (0, 1).
use crate::irt::core::data::ResponseMatrix;
use crate::irt::core::params::{ItemParams, ParamSet};
use crate::irt::core::probability::probabilities;
use crate::irt::errors::{IrtError, IrtResult};
use ndarray::Array1;
use rand::Rng;
use rand_distr::{Beta, Distribution, LogNormal, Normal};

/// Log-scale standard deviation of simulated discriminations.
pub const DISCRIMINATION_LOG_SD: f64 = 0.2;
/// Beta shape parameters for simulated guessing rates.
pub const GUESSING_ALPHA: f64 = 5.0;
pub const GUESSING_BETA: f64 = 15.0;

/// Draw a ground-truth parameter set and a response matrix sampled from it.
///
/// Parameters
/// ----------
/// - `n_students`: number of response rows to draw, must be positive.
/// - `n_items`: number of items to draw parameters for, must be positive.
/// - `rng`: source of randomness; seeding it fixes the whole exam.
///
/// Returns
/// -------
/// `IrtResult<(ResponseMatrix, ParamSet)>` with the sampled responses and
/// the generating parameters.
///
/// Errors
/// ------
/// - `IrtError::InvalidModelSize` when either dimension is zero.
/// - `IrtError::InvalidDistribution` when a sampling distribution cannot
///   be constructed.
pub fn simulate_exam<R: Rng>(
    n_students: usize,
    n_items: usize,
    rng: &mut R,
) -> IrtResult<(ResponseMatrix, ParamSet)> {
    if n_students == 0 || n_items == 0 {
        return Err(IrtError::InvalidModelSize { n_students, n_items });
    }

    let ability = Normal::new(0.0, 1.0).map_err(dist_err("ability"))?;
    let difficulty = Normal::new(0.0, 1.0).map_err(dist_err("difficulty"))?;
    let discrimination =
        LogNormal::new(0.0, DISCRIMINATION_LOG_SD).map_err(dist_err("discrimination"))?;
    let guessing = Beta::new(GUESSING_ALPHA, GUESSING_BETA).map_err(dist_err("guessing"))?;

    let a = Array1::from_shape_fn(n_items, |_| discrimination.sample(&mut *rng));
    let b = Array1::from_shape_fn(n_items, |_| difficulty.sample(&mut *rng));
    let c = Array1::from_shape_fn(n_items, |_| guessing.sample(&mut *rng));
    let theta = Array1::from_shape_fn(n_students, |_| ability.sample(&mut *rng));
    let params = ParamSet::new(ItemParams::new(a, b, c)?, theta)?;

    let probs = probabilities(&params);
    let responses = probs.map(|&p| if rng.gen::<f64>() < p { 1.0 } else { 0.0 });

    Ok((ResponseMatrix::new(responses)?, params))
}

fn dist_err<E: std::fmt::Display>(what: &'static str) -> impl FnOnce(E) -> IrtError {
    move |e| IrtError::InvalidDistribution { what, text: e.to_string() }
}
