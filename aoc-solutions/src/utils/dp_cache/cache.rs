//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// Why [`DpCache::get`] could not produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DpError<I, E> {
    /// `index` was requested again while its own value was still being
    /// resolved, so the dependency graph is not a DAG.
    Cycle(I),
    /// The problem's `compute` failed.
    Compute(E),
}

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Dependencies are resolved recursively and every value is computed at most
/// once. Indices currently on the resolution path are tracked, so a cyclic
/// dependency graph fails with [`DpError::Cycle`] instead of recursing
/// forever.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Factorial;
///
/// impl DpProblem<usize, u64> for Factorial {
///     type Error = Infallible;
///
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
///         Ok(if *n == 0 { 1 } else { (*n as u64) * deps[0] })
///     }
/// }
///
/// let cache = DpCache::with_problem(VecBackend::new(), Factorial);
/// assert_eq!(cache.get(&5).unwrap(), 120);
/// ```
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    in_progress: RefCell<HashSet<I>>,
    problem: P,
    _phantom: PhantomData<K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Hash + Eq + Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            in_progress: RefCell::new(HashSet::new()),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for `index`, computing it and its dependencies if
    /// necessary.
    ///
    /// A failure leaves already-computed values cached; the failed index and
    /// everything that depended on it stay uncached.
    pub fn get(&self, index: &I) -> Result<K, DpError<I, P::Error>> {
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        if !self.in_progress.borrow_mut().insert(index.clone()) {
            return Err(DpError::Cycle(index.clone()));
        }
        let resolved = self.resolve(index);
        self.in_progress.borrow_mut().remove(index);

        let value = resolved?;
        Ok(self
            .backend
            .borrow_mut()
            .get_or_insert(index.clone(), || value)
            .clone())
    }

    /// Number of values computed so far
    pub fn cached_len(&self) -> usize {
        self.backend.borrow().len()
    }

    fn resolve(&self, index: &I) -> Result<K, DpError<I, P::Error>> {
        // No borrow is held across these recursive calls.
        let dep_values = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Result<Vec<K>, _>>()?;

        self.problem
            .compute(index, dep_values)
            .map_err(DpError::Compute)
    }
}
