//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run an Advent of Code solver on one puzzle input", version)]
pub struct Args {
    /// Puzzle year
    #[arg(short, long, default_value_t = 2023)]
    pub year: u16,

    /// Puzzle day
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Input file; overrides --input-dir
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding `{year}_day{day:02}.txt` input files
    #[arg(long, default_value = "~/.cache/aoc_solver/inputs")]
    pub input_dir: PathBuf,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc", "--day", "4"]).unwrap();
        assert_eq!(args.year, 2023);
        assert_eq!(args.day, 4);
        assert_eq!(args.part, None);
        assert!(args.input.is_none());
        assert_eq!(args.input_dir, PathBuf::from("~/.cache/aoc_solver/inputs"));
        assert!(args.tags.is_empty());
    }

    #[test]
    fn test_tags_split_on_commas() {
        let args = Args::try_parse_from(["aoc", "-d", "3", "-t", "2023,grid"]).unwrap();
        assert_eq!(args.tags, vec!["2023".to_string(), "grid".to_string()]);
    }

    #[test]
    fn test_ranges_enforced() {
        assert!(Args::try_parse_from(["aoc"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "1", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "1", "-q", "-v"]).is_err());
    }
}
