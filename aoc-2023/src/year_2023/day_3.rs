//! Day 3: Gear Ratios
//!
//! The engine schematic is scanned row by row into symbols and part-number
//! spans, both grouped by row. Adjacency is never stored; it is looked up by
//! checking the three rows around a symbol.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

// Anything but a digit, a period or whitespace.
static SYMBOL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.\s]").unwrap());
static PART_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

const GEAR: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub row: usize,
    pub col: usize,
    pub is_gear: bool,
}

/// A maximal run of digits on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub value: u32,
    pub row: usize,
    pub col: usize,
    pub len: usize,
}

impl Part {
    /// True when the symbol touches the span, diagonals included
    pub fn is_adjacent_to(&self, symbol: &Symbol) -> bool {
        symbol.row + 1 >= self.row
            && symbol.row <= self.row + 1
            && symbol.col + 1 >= self.col
            && symbol.col <= self.col + self.len
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Schematic {
    symbols: BTreeMap<usize, Vec<Symbol>>,
    parts: BTreeMap<usize, Vec<Part>>,
}

impl Schematic {
    /// Scan every line of the schematic; rows without entities are left out
    pub fn scan(input: &str) -> Result<Self> {
        let mut schematic = Schematic::default();
        for (row, line) in input.lines().enumerate() {
            schematic
                .scan_row(row, line)
                .with_context(|| format!("(line {})", row + 1))?;
        }
        Ok(schematic)
    }

    fn scan_row(&mut self, row: usize, line: &str) -> Result<()> {
        let symbols: Vec<Symbol> = SYMBOL_REGEX
            .find_iter(line)
            .map(|m| Symbol {
                row,
                col: m.start(),
                is_gear: m.as_str() == GEAR,
            })
            .collect();

        let parts = PART_REGEX
            .find_iter(line)
            .map(|m| {
                let value = m
                    .as_str()
                    .parse()
                    .with_context(|| format!("part number {} is too large", m.as_str()))?;
                Ok(Part {
                    value,
                    row,
                    col: m.start(),
                    len: m.len(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if !symbols.is_empty() {
            self.symbols.insert(row, symbols);
        }
        if !parts.is_empty() {
            self.parts.insert(row, parts);
        }
        Ok(())
    }

    /// All symbols, top to bottom, left to right
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values().flatten()
    }

    fn parts_on_row(&self, row: usize) -> &[Part] {
        self.parts.get(&row).map(Vec::as_slice).unwrap_or_default()
    }

    /// Parts on the symbol's row and the rows directly above and below it
    pub fn adjacent_parts<'s>(&'s self, symbol: &'s Symbol) -> impl Iterator<Item = &'s Part> {
        (symbol.row.saturating_sub(1)..=symbol.row + 1)
            .flat_map(|row| self.parts_on_row(row))
            .filter(move |part| part.is_adjacent_to(symbol))
    }

    /// Sum of part values over every (symbol, adjacent part) pair
    ///
    /// A part touching two symbols is counted twice.
    pub fn part_number_sum(&self) -> u64 {
        self.symbols()
            .flat_map(|symbol| self.adjacent_parts(symbol))
            .map(|part| u64::from(part.value))
            .sum()
    }

    /// Product of the two parts for gears touching exactly two, summed
    pub fn gear_ratio_sum(&self) -> u64 {
        self.symbols()
            .filter(|symbol| symbol.is_gear)
            .filter_map(|gear| {
                let mut adjacent = self.adjacent_parts(gear);
                match (adjacent.next(), adjacent.next(), adjacent.next()) {
                    (Some(a), Some(b), None) => Some(u64::from(a.value) * u64::from(b.value)),
                    _ => None,
                }
            })
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Schematic::scan(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.part_number_sum().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.gear_ratio_sum().to_string())
    }
}
