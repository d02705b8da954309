//! Output formatting for solver results

use crate::runner::PartResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &PartResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(answer), false) => println!("{}", format_answer_line(result, answer)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(e), false) => eprintln!("{}: Error - {}", prefix(result), e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[PartResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Parse time: {}", format_duration(total_parse_time));
        println!("Solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn prefix(result: &PartResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `2023/01 Part 1: 142 (parse: 12µs, solve: 3µs)`
fn format_answer_line(result: &PartResult, answer: &str) -> String {
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!(
        "{}: {} ({}solve: {})",
        prefix(result),
        answer,
        parse_timing,
        format_duration(result.solve_duration)
    )
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros.unsigned_abs().into())
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
