use std::collections::{BTreeSet, VecDeque};

use crate::utils::dp_cache::{DpCache, DpError, DpProblem, VecBackend};

use super::error::GraphError;
use super::graph::BagGraph;

/// Every bag that directly or transitively holds `target`.
///
/// Walks the content → container index breadth first. `target` itself is
/// never part of the result, even when a cycle leads back to it.
pub fn find_all_containers<'g>(
    graph: &'g BagGraph,
    target: &str,
) -> Result<BTreeSet<&'g str>, GraphError> {
    let start = graph.index_of(target)?;

    let mut seen = vec![false; graph.node_count()];
    seen[start] = true;
    let mut queue = VecDeque::from([start]);
    let mut holders = BTreeSet::new();

    while let Some(bag) = queue.pop_front() {
        for edge in graph.container_edges(bag) {
            if !std::mem::replace(&mut seen[edge.node], true) {
                holders.insert(graph.name(edge.node));
                queue.push_back(edge.node);
            }
        }
    }
    Ok(holders)
}

/// Total number of bags nested inside one `target` bag.
///
/// `total(bag) = Σ count × (1 + total(content))` over the bag's contents, so a
/// bag holding nothing totals 0. Each bag's total is computed once.
pub fn count_total_contained(graph: &BagGraph, target: &str) -> Result<u64, GraphError> {
    let start = graph.index_of(target)?;
    let cache = DpCache::with_problem(
        VecBackend::with_capacity(graph.node_count()),
        NestedTotal { graph },
    );

    cache.get(&start).map_err(|err| match err {
        DpError::Cycle(bag) => GraphError::CycleDetected(graph.name(bag).to_string()),
        DpError::Compute(err) => err,
    })
}

struct NestedTotal<'g> {
    graph: &'g BagGraph,
}

impl DpProblem<usize, u64> for NestedTotal<'_> {
    type Error = GraphError;

    fn deps(&self, bag: &usize) -> Vec<usize> {
        self.graph
            .content_edges(*bag)
            .iter()
            .map(|edge| edge.node)
            .collect()
    }

    fn compute(&self, bag: &usize, totals: Vec<u64>) -> Result<u64, GraphError> {
        self.graph
            .content_edges(*bag)
            .iter()
            .zip(totals)
            .try_fold(0u64, |sum, (edge, inner)| {
                inner
                    .checked_add(1)
                    .and_then(|per_bag| per_bag.checked_mul(u64::from(edge.count)))
                    .and_then(|subtotal| sum.checked_add(subtotal))
            })
            .ok_or_else(|| GraphError::Overflow(self.graph.name(*bag).to_string()))
    }
}
