//! The `irt_calibrate score` command.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use irt_calibrate::irt::core::DEFAULT_LIKELIHOOD_EPS;
use irt_calibrate::irt::{expected_scores, scale_scores, AbilityModel, FitOptions};
use irt_calibrate::optimization::adam::AdamOptions;
use irt_calibrate::storage::{read_responses, write_scores, ParamBundle};

pub fn execute(
    estimates: PathBuf, responses: Option<PathBuf>, learning_rate: f64, iterations: usize,
    head: usize, output: Option<PathBuf>,
) -> Result<()> {
    let bundle = ParamBundle::load(&estimates)?;

    let params = match responses {
        Some(path) => {
            let data = read_responses(&path)?;
            info!(
                students = data.n_students(),
                path = %path.display(),
                "re-estimating abilities against the bundle's items"
            );
            let adam = AdamOptions::new(learning_rate, iterations)?;
            let options = FitOptions::new(adam, DEFAULT_LIKELIHOOD_EPS)?;
            AbilityModel::new(bundle.items()?, options).fit(&data)?
        }
        None => bundle.to_params()?,
    };

    let expected = expected_scores(&params);
    let points = scale_scores(&expected, params.n_items());

    let shown = head.min(expected.len());
    for i in 0..shown {
        println!(
            "student {i}: expected {:.2} / {}, points {}",
            expected[i],
            params.n_items(),
            points[i]
        );
    }
    if expected.len() > shown {
        println!("... {} more students", expected.len() - shown);
    }

    if let Some(path) = output {
        write_scores(&path, &expected, &points)?;
        println!("Scores written to {}", path.display());
    }

    Ok(())
}
