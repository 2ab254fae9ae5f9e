//! Advent of Code Solver Library
//!
//! A small type-safe framework for running Advent of Code solvers. Each
//! puzzle is a solver with its own input parsing and one answer per part.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into the data shared by every part
//! - [`PartSolver<N>`] implements part `N`; [`Solver`] dispatches by part number
//! - [`SolverInstance`] / [`DynSolver`] hold parsed input and time each part
//! - [`RegistryBuilder`] / [`SolverRegistry`] map (year, day) to solvers
//!
//! Parts that want to reuse work store it in their `SharedData`, which every
//! part receives mutably.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegistryBuilder, SolverFactory,
    SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};
