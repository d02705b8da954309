//! Advent of Code Solver Library
//!
//! A small, type-safe framework for puzzle solvers: each solver parses its
//! input once into shared data and then answers one or more parts from it.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`] / [`PartSolver`] / [`Solver`] traits for defining solvers
//! - [`SolverInstance`] and the object-safe [`DynSolver`] for running them with timing
//! - A flat [`SolverRegistry`] keyed by year and day
//! - Plugin registration through `inventory` and `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .enumerate()
//!             .map(|(idx, line)| line.parse().map_err(|e| ParseError::at_line(idx + 1, e)))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or(0).to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Depths>(2021, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n7\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "11");
//! assert_eq!(solver.solve(2).unwrap().answer, "7");
//! ```
//!
//! # Key Concepts
//!
//! ## Shared data
//!
//! Parts take `&mut SharedData`, so an expensive intermediate result computed
//! by part 1 can be cached in the shared data and reused by part 2.
//!
//! ## Plugin System
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 1, tags = ["2023"])]
//! pub struct Solver;
//! ```
//!
//! Linking the crate that holds such solvers is enough for
//! [`SolverRegistryBuilder::register_all_plugins`] to find them.

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
