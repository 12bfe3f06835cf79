//! The `irt_calibrate simulate` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use irt_calibrate::simulate::simulate_exam;
use irt_calibrate::storage::{write_responses, ParamBundle};

pub fn execute(
    students: usize, items: usize, seed: u64, output: PathBuf, params: Option<PathBuf>,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (data, truth) = simulate_exam(students, items, &mut rng)?;
    info!(students, items, seed, "simulated exam");

    write_responses(&output, &data)?;
    println!("Responses written to {}", output.display());

    if let Some(path) = params {
        ParamBundle::from_params(&truth).save(&path)?;
        println!("Generating parameters written to {}", path.display());
    }

    Ok(())
}
