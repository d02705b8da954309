//! Day 1: Trebuchet?!
//!
//! Each line hides a calibration value: the first and last numeral on the
//! line form a two-digit number. Part 2 also counts spelled-out digits, and
//! those may overlap ("twone" is two, then one).

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "strings"])]
pub struct Solver;

const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Which spellings count as a numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralMode {
    /// ASCII digits only
    Digits,
    /// ASCII digits and the words "one".."nine"
    DigitsAndWords,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, NumeralMode::Digits).map(|sum| sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, NumeralMode::DigitsAndWords).map(|sum| sum.to_string())
    }
}

/// Value of the numeral starting at byte `start`, if any
fn numeral_at(line: &str, start: usize, mode: NumeralMode) -> Option<u32> {
    let rest = line.as_bytes().get(start..)?;
    match *rest.first()? {
        b @ b'0'..=b'9' => Some(u32::from(b - b'0')),
        _ if mode == NumeralMode::DigitsAndWords => DIGIT_WORDS
            .iter()
            .position(|word| rest.starts_with(word.as_bytes()))
            .map(|idx| idx as u32 + 1),
        _ => None,
    }
}

/// Every numeral on the line in order, overlapping words included
pub fn numerals(line: &str, mode: NumeralMode) -> impl Iterator<Item = u32> + '_ {
    (0..line.len()).filter_map(move |start| numeral_at(line, start, mode))
}

/// First numeral * 10 + last numeral, or `None` when the line has no numeral
pub fn calibration_value(line: &str, mode: NumeralMode) -> Option<u32> {
    let first = numerals(line, mode).next()?;
    let last = (0..line.len())
        .rev()
        .find_map(|start| numeral_at(line, start, mode))?;
    Some(first * 10 + last)
}

fn calibration_sum(lines: &[&str], mode: NumeralMode) -> Result<u32, SolveError> {
    lines
        .iter()
        .enumerate()
        .map(|(line_idx, line)| {
            calibration_value(line, mode)
                .ok_or_else(|| anyhow!("(line {}) no numeral in {:?}", line_idx + 1, line))
        })
        .sum::<Result<u32, anyhow::Error>>()
        .map_err(|e| SolveError::SolveFailed(e.into()))
}
