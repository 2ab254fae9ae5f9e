//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoization for recursive computations whose values depend on other values
//! through a directed graph of indices.
//!
//! - [`DpProblem`]: defines the dependencies of an index and how to combine
//!   their values
//! - [`DpCache`]: single-threaded cache with `RefCell` interior mutability
//! - [`Backend`]: value storage; [`VecBackend`] for dense `usize` indices
//!
//! # Cycle Behavior
//!
//! The cache tracks which indices are currently being resolved. Requesting one
//! of them again means the dependencies loop back on themselves; `get` then
//! returns [`DpError::Cycle`] with the repeated index.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Number of paths from each node to node 3
//! struct Paths;
//!
//! impl DpProblem<usize, u64> for Paths {
//!     type Error = &'static str;
//!
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         match n {
//!             0 => vec![1, 2],
//!             1 | 2 => vec![3],
//!             _ => vec![],
//!         }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Self::Error> {
//!         Ok(if *n == 3 { 1 } else { deps.iter().sum() })
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Paths);
//! assert_eq!(cache.get(&0), Ok(2));
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, VecBackend};
pub use cache::{DpCache, DpError};
pub use problem::DpProblem;
