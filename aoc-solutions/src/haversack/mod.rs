//! Weighted containment graph for bag rules.
//!
//! Rules of the form `light red bags contain 1 bright white bag, 2 muted
//! yellow bags.` become weighted edges `light red -(1)-> bright white`,
//! `light red -(2)-> muted yellow`. Two queries run on the finished graph:
//!
//! - [`find_all_containers`]: which bags can end up holding a given bag
//! - [`count_total_contained`]: how many bags one bag holds in total
//!
//! ```
//! use aoc_solutions::haversack::{BagGraph, count_total_contained, find_all_containers};
//!
//! let graph = BagGraph::parse(
//!     "bright white bags contain 1 shiny gold bag.\n\
//!      shiny gold bags contain 2 dark red bags.\n\
//!      dark red bags contain no other bags.",
//! )
//! .unwrap();
//!
//! assert_eq!(find_all_containers(&graph, "shiny gold").unwrap().len(), 1);
//! assert_eq!(count_total_contained(&graph, "bright white").unwrap(), 3);
//! ```

mod error;
mod graph;
mod query;

pub use error::GraphError;
pub use graph::{BagGraph, ContainmentEdge};
pub use query::{count_total_contained, find_all_containers};
