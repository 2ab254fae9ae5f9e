//! `aoc`: runs registered Advent of Code solvers on local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, SolverResult};
use inputs::InputStore;
use output::OutputFormatter;
use std::process::ExitCode;
use std::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let config = Config::from_args(Args::parse());
    init_logging(config.verbose);

    match run(&config) {
        Ok(results) if results.iter().all(|r| r.answer.is_ok()) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn build_registry() -> Result<SolverRegistry, CliError> {
    Ok(aoc_solutions::register_all(RegistryBuilder::new())?.build())
}

/// Run every selected part and return the results in print order
fn run(config: &Config) -> Result<Vec<SolverResult>, CliError> {
    let inputs = match &config.input_file {
        Some(path) => InputStore::from_file(path)?,
        None => InputStore::directory(&config.input_dir),
    };

    let executor = Executor::new(build_registry()?, inputs, config)
        .map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(Vec::new());
    }
    if config.input_file.is_some() && work_items.len() > 1 {
        return Err(CliError::Config(format!(
            "--input needs exactly one selected solver, {} match; narrow with --year/--day/--tags",
            work_items.len()
        )));
    }

    for work in &work_items {
        if !executor.inputs().contains(work.year, work.day) {
            warn!(year = work.year, day = work.day, "input file missing");
        }
    }

    let expected: Vec<ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |part| ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        })
        .collect();
    info!(solvers = work_items.len(), parts = expected.len(), "running");
    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut aggregator = ResultAggregator::new(expected);
    let mut results = Vec::new();

    let (tx, rx) = mpsc::channel();
    std::thread::scope(|s| {
        let handle = s.spawn(|| executor.execute(tx));

        for result in rx {
            for ready in aggregator.add(result) {
                formatter.print_result(&ready);
                results.push(ready);
            }
        }
        for ready in aggregator.drain() {
            formatter.print_result(&ready);
            results.push(ready);
        }
        if !aggregator.is_complete() {
            warn!("not all expected results were received");
        }

        handle
            .join()
            .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
            .map_err(CliError::Executor)
    })?;

    formatter.print_summary(&results);
    Ok(results)
}
