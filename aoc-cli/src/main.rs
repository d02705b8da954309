//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod input;
mod output;
mod runner;

// Import aoc-2023 to link the solver plugins
use aoc_2023 as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use output::OutputFormatter;
use runner::Runner;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    init_logging(config.verbose)?;
    tracing::debug!(?config, "resolved configuration");

    let registry = build_registry(&config.tags)?;
    let input = input::read_input(&config.input_path)?;

    let formatter = OutputFormatter::new(config.quiet);
    let results = Runner::new(registry).run(config.year, config.day, config.part, &input)?;
    for result in &results {
        formatter.print_result(result);
    }
    formatter.print_summary(&results);

    match results.iter().filter(|r| r.answer.is_err()).count() {
        0 => Ok(()),
        failed => Err(CliError::PartsFailed(failed)),
    }
}

/// Log to stderr; `-v` forces debug, otherwise `RUST_LOG` or warn
fn init_logging(verbose: bool) -> Result<(), CliError> {
    let filter = if verbose {
        EnvFilter::try_new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))
    }
    .map_err(|e| CliError::Config(e.to_string()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
