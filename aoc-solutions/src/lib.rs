//! Advent of Code 2020 solutions and the engines behind them
//!
//! - [`haversack`]: weighted containment graph with container search and
//!   nested totals (day 7)
//! - [`conway_cubes`]: sparse N-dimensional cellular automaton (day 17)
//! - [`utils::dp_cache`]: memoized recursion with cycle detection
//!
//! [`register_all`] wires the day solvers into an
//! [`aoc_solver::RegistryBuilder`].

pub mod conway_cubes;
pub mod haversack;
pub mod utils;
pub mod year_2020;

use aoc_solver::{RegistrationError, RegistryBuilder};

/// Register every solver in this crate.
pub fn register_all(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    builder
        .register_solver::<year_2020::day_7::Day7>(2020, 7, &["2020", "graph"])?
        .register_solver::<year_2020::day_17::Day17>(2020, 17, &["2020", "automaton"])
}
