//! Advent of Code puzzle solutions with automatic registration
//!
//! Each solution uses the `AutoRegisterSolver` derive macro, so linking this
//! crate is enough for `SolverRegistryBuilder::register_all_plugins` to find it.

#[cfg(feature = "year-2023")]
pub mod year_2023;
