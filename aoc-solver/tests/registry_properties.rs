//! Registry construction and lookup tests

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, RegistrationError, SolveError, SolverError,
    SolverRegistryBuilder,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Checksum;

impl AocParser for Checksum {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(idx, line)| line.parse().map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect()
    }
}

impl PartSolver<1> for Checksum {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Checksum {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().fold(0u64, |acc, n| acc ^ n).to_string())
    }
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_solver::<Checksum>(2020, 1)
        .unwrap()
        .register_solver::<Checksum>(2020, 1);

    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(2020, 1))));
}

#[test]
fn test_out_of_range_registration_rejected() {
    let result = SolverRegistryBuilder::new().register_solver::<Checksum>(2014, 1);
    assert!(matches!(result, Err(RegistrationError::InvalidYearDay(2014, 1))));

    let result = SolverRegistryBuilder::new().register_solver::<Checksum>(2020, 26);
    assert!(matches!(result, Err(RegistrationError::InvalidYearDay(2020, 26))));
}

#[test]
fn test_lookup_errors() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Checksum>(2020, 1)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2020, 2, "1"),
        Err(SolverError::NotFound(2020, 2))
    ));
    assert!(matches!(
        registry.create_solver(2035, 1, "1"),
        Err(SolverError::InvalidYearDay(2035, 1))
    ));
    assert!(matches!(
        registry.create_solver(2020, 1, "1\nx"),
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}

#[test]
fn test_storage_metadata() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Checksum>(2021, 3)
        .unwrap()
        .register_solver::<Checksum>(2020, 9)
        .unwrap()
        .build();

    let storage = registry.storage();
    assert_eq!(storage.len(), 2);
    assert!(!storage.is_empty());

    let keys: Vec<(u16, u8)> = storage.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2020, 9), (2021, 3)]);
    assert_eq!(storage.get_info(2021, 3).map(|i| i.parts), Some(2));
    assert!(storage.get_info(2021, 4).is_none());
}

#[test]
fn test_instance_rejects_out_of_range_part() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Checksum>(2020, 1)
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2020, 1, "5\n3").unwrap();

    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Any valid year/day registers and is found again at the same key.
    #[test]
    fn prop_register_then_lookup(year in 2015u16..=2034, day in 1u8..=25) {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Checksum>(year, day)
            .unwrap()
            .build();

        prop_assert!(registry.storage().contains(year, day));
        let mut solver = registry.create_solver(year, day, "6\n3").unwrap();
        prop_assert_eq!(solver.year(), year);
        prop_assert_eq!(solver.day(), day);
        prop_assert_eq!(solver.solve(1).unwrap().answer, "9");
        prop_assert_eq!(solver.solve(2).unwrap().answer, "5");
    }
}
