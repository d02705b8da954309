//! Runs the parts of one solver against one input

use aoc_solver::{SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single part
#[derive(Debug)]
pub struct PartResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolveError>,
    /// Parse time, attached to the first part only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Runs solvers from a registry
pub struct Runner {
    registry: SolverRegistry,
}

impl Runner {
    pub fn new(registry: SolverRegistry) -> Self {
        Self { registry }
    }

    /// Parse `input` once and solve the requested parts in order
    ///
    /// Lookup and parse failures abort the run. A failing part is recorded
    /// in its result and the remaining parts still run.
    pub fn run(
        &self,
        year: u16,
        day: u8,
        part_filter: Option<u8>,
        input: &str,
    ) -> Result<Vec<PartResult>, SolverError> {
        let mut solver = self.registry.create_solver(year, day, input)?;
        let mut parse_duration = Some(solver.parse_duration());

        let results = parts_to_run(part_filter, solver.parts())
            .map(|part| {
                let (answer, solve_duration) = match solver.solve(part) {
                    Ok(result) => {
                        let duration = result.duration();
                        (Ok(result.answer), duration)
                    }
                    Err(e) => {
                        tracing::warn!(year, day, part, error = %e, "part failed");
                        (Err(e), TimeDelta::zero())
                    }
                };
                PartResult {
                    year,
                    day,
                    part,
                    answer,
                    parse_duration: parse_duration.take(),
                    solve_duration,
                }
            })
            .collect();
        Ok(results)
    }
}

/// Parts requested by the filter; an explicit part is passed through even
/// when the solver lacks it so the solver reports the range error
fn parts_to_run(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) => p..=p,
        None => 1..=max_parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolverRegistryBuilder};

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Sum;

    impl AocParser for Sum {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .split_whitespace()
                .map(|n| n.parse().map_err(|e| ParseError::InvalidFormat(format!("{}", e))))
                .collect()
        }
    }

    impl PartSolver<1> for Sum {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().sum::<i64>().to_string())
        }
    }

    impl PartSolver<2> for Sum {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared
                .iter()
                .max()
                .map(i64::to_string)
                .ok_or_else(|| SolveError::SolveFailed("empty input".into()))
        }
    }

    fn runner() -> Runner {
        Runner::new(
            SolverRegistryBuilder::new()
                .register_solver::<Sum>(2023, 9)
                .unwrap()
                .build(),
        )
    }

    #[test]
    fn test_runs_all_parts_in_order() {
        let results = runner().run(2023, 9, None, "3 9 4").unwrap();
        let answers: Vec<(u8, String)> = results
            .iter()
            .map(|r| (r.part, r.answer.as_ref().unwrap().clone()))
            .collect();
        assert_eq!(answers, vec![(1, "16".to_string()), (2, "9".to_string())]);

        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_part_filter() {
        let results = runner().run(2023, 9, Some(2), "3 9 4").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].part, 2);
        assert!(results[0].parse_duration.is_some());
    }

    #[test]
    fn test_failing_part_does_not_stop_run() {
        let results = runner().run(2023, 9, None, "").unwrap();
        assert_eq!(results[0].answer.as_deref().ok(), Some("0"));
        assert!(matches!(results[1].answer, Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_missing_part_reported_per_part() {
        let results = runner().run(2023, 9, Some(3), "1").unwrap();
        assert!(matches!(results[0].answer, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_lookup_and_parse_errors_abort() {
        assert!(matches!(
            runner().run(2023, 10, None, "1"),
            Err(SolverError::NotFound(2023, 10))
        ));
        assert!(matches!(
            runner().run(2023, 9, None, "1 x"),
            Err(SolverError::ParseError(_))
        ));
    }
}
