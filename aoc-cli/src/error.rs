//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input could not be loaded
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver lookup or parsing failed
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// At least one part failed; each failure was already reported
    #[error("{0} part(s) failed")]
    PartsFailed(usize),
}

/// Input-file errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file does not exist
    #[error("no input file at {}", .0.display())]
    Missing(PathBuf),

    /// Input file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
