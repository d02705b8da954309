//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::input;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    pub year: u16,
    pub day: u8,
    /// Part filter (None = all parts)
    pub part: Option<u8>,
    /// Only solvers carrying every one of these tags are registered
    pub tags: Vec<String>,
    /// Input file to solve
    pub input_path: PathBuf,
    pub quiet: bool,
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args, resolving the input file path
    pub fn from_args(args: Args) -> Self {
        let input_path = match args.input {
            Some(path) => expand_tilde(&path),
            None => input::default_input_path(&expand_tilde(&args.input_dir), args.year, args.day),
        };

        Config {
            year: args.year,
            day: args.day,
            part: args.part,
            tags: args.tags,
            input_path,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}
