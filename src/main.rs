// Trains on the bundled people table and prints the ranked tiers for its
// held-out query record. Set RUST_LOG=info (or debug) for training logs.
use std::process::ExitCode;

use tier_classifier::{ClassifierConfig, ClassifierError, Dataset};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(ranked) => {
            println!("{ranked}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> tier_classifier::Result<String> {
    let dataset = Dataset::bundled()?;
    let query = dataset.query.clone().ok_or(ClassifierError::MissingQuery)?;
    tier_classifier::run(&dataset, &query, ClassifierConfig::default())
}
