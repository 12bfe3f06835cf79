//! irt_calibrate CLI — exam calibration from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "irt_calibrate", version, about = "3PL exam calibration and scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit item parameters and abilities to a response matrix
    Fit {
        /// Path to the response CSV (students as rows, items as columns)
        #[arg(long)]
        data: PathBuf,

        /// Adam learning rate
        #[arg(long, default_value = "0.01")]
        learning_rate: f64,

        /// Number of optimization iterations
        #[arg(long, default_value = "100")]
        iterations: usize,

        /// Compute device hint; only "cpu" is implemented
        #[arg(long, default_value = "cpu")]
        device: String,

        /// Where to write the estimates bundle
        #[arg(long, default_value = "estimates.json")]
        output: PathBuf,
    },

    /// Score students using a fitted estimates bundle
    Score {
        /// Path to the estimates bundle
        #[arg(long)]
        estimates: PathBuf,

        /// Response CSV to re-estimate abilities for, instead of scoring
        /// the bundle's own students
        #[arg(long)]
        responses: Option<PathBuf>,

        /// Adam learning rate for the ability refit
        #[arg(long, default_value = "0.01")]
        learning_rate: f64,

        /// Number of refit iterations
        #[arg(long, default_value = "100")]
        iterations: usize,

        /// How many leading students to print
        #[arg(long, default_value = "5")]
        head: usize,

        /// Optional scores CSV to write
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate a synthetic exam with known parameters
    Simulate {
        /// Number of students to draw
        #[arg(long)]
        students: usize,

        /// Number of items to draw
        #[arg(long)]
        items: usize,

        /// RNG seed
        #[arg(long, default_value = "123")]
        seed: u64,

        /// Where to write the response CSV
        #[arg(long, default_value = "responses.csv")]
        output: PathBuf,

        /// Optional bundle path for the generating parameters
        #[arg(long)]
        params: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("irt_calibrate=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fit { data, learning_rate, iterations, device, output } => {
            commands::fit::execute(data, learning_rate, iterations, device, output)
        }
        Commands::Score { estimates, responses, learning_rate, iterations, head, output } => {
            commands::score::execute(estimates, responses, learning_rate, iterations, head, output)
        }
        Commands::Simulate { students, items, seed, output, params } => {
            commands::simulate::execute(students, items, seed, output, params)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
