//! Trait-based DP problem definition.

/// A dynamic programming problem over indices of type `I` producing values
/// of type `K`.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Fibonacci;
///
/// impl DpProblem<usize, u64> for Fibonacci {
///     type Error = Infallible;
///
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
///     }
///
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
///         Ok(if *n <= 1 { *n as u64 } else { deps[0] + deps[1] })
///     }
/// }
///
/// let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
/// assert_eq!(cache.get(&10).unwrap(), 55);
/// ```
pub trait DpProblem<I, K> {
    /// Failure raised by [`DpProblem::compute`]
    type Error;

    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for `index` from the resolved dependency values.
    ///
    /// `deps` holds one value per index returned by [`DpProblem::deps`], in
    /// the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> Result<K, Self::Error>;
}
