//! Sparse cellular automaton on an unbounded lattice of any dimension.
//!
//! A 2-D [`Pattern`] seeds a [`Grid`] in `D >= 2` dimensions; each
//! [`Grid::step`] applies the rule to every cell at once:
//!
//! - an active cell stays active with 2 or 3 active neighbours
//! - an inactive cell becomes active with exactly 3 active neighbours
//!
//! ```
//! use aoc_solutions::conway_cubes::Pattern;
//!
//! let pattern: Pattern = ".#.\n..#\n###".parse().unwrap();
//! let grid = pattern.embed(3).unwrap();
//! assert_eq!(grid.run(6).active_count(), 112);
//! ```

mod coordinate;
mod error;
mod grid;
mod pattern;

pub use coordinate::{Coordinate, Neighborhood};
pub use error::PatternError;
pub use grid::Grid;
pub use pattern::Pattern;
