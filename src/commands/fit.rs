//! The `irt_calibrate fit` command.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use irt_calibrate::irt::core::DEFAULT_LIKELIHOOD_EPS;
use irt_calibrate::irt::{FitOptions, ThreePlModel};
use irt_calibrate::optimization::adam::AdamOptions;
use irt_calibrate::storage::{read_responses, ParamBundle};

pub fn execute(
    data: PathBuf, learning_rate: f64, iterations: usize, device: String, output: PathBuf,
) -> Result<()> {
    if device != "cpu" {
        info!(requested = %device, "compute device hint ignored, running on cpu");
    }

    let responses = read_responses(&data)?;
    info!(
        students = responses.n_students(),
        items = responses.n_items(),
        path = %data.display(),
        "loaded response matrix"
    );

    let adam = AdamOptions::new(learning_rate, iterations)?;
    let options = FitOptions::new(adam, DEFAULT_LIKELIHOOD_EPS)?;
    let mut model = ThreePlModel::new(responses.n_students(), responses.n_items(), options)?;
    model.fit(&responses)?;

    if let Some(outcome) = &model.results {
        info!(loglik = outcome.value, iterations = outcome.iterations, "calibration finished");
    }

    ParamBundle::from_params(model.params()?).save(&output)?;
    println!("Estimates written to {}", output.display());

    Ok(())
}
