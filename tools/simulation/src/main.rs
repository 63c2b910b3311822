//! Pipeline entry point
//!
//! Reads the run configuration, drives one complete producer/consumer
//! run, and prints the final top-of-book plus the latency statistics
//! block. Optionally writes the full report as JSON.

use simulation::config::SimConfig;
use simulation::export;
use simulation::runner::SimRunner;
use types::errors::PipelineError;

fn main() -> Result<(), PipelineError> {
    tracing_subscriber::fmt::init();

    let config = SimConfig::from_env()?;
    tracing::info!(
        producers = config.producers,
        duration_secs = config.duration.as_secs_f64(),
        seed = config.seed,
        "matching pipeline starting"
    );

    let report = SimRunner::new(config.clone()).run()?;

    println!("\n--- FINAL ---");
    println!("{}", report.top_of_book);
    match &report.latency {
        Some(latency) => println!("\n{latency}"),
        None => println!("\nNo latencies recorded."),
    }

    if let Some(path) = &config.export_path {
        export::write_to_file(&report, path).map_err(|e| PipelineError::System {
            message: format!("failed to write report to {path}: {e}"),
        })?;
        tracing::info!(path = %path, "run report exported");
    }

    Ok(())
}
