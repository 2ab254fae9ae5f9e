use std::collections::HashSet;
use std::iter;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use super::coordinate::{Coordinate, Neighborhood};
use super::error::PatternError;

/// Whether a cell is active in the next generation.
fn next_state(active: bool, active_neighbors: usize) -> bool {
    matches!((active, active_neighbors), (true, 2 | 3) | (false, 3))
}

/// Sparse, unbounded grid of active cells.
///
/// Only active coordinates are stored; any coordinate not in the set is
/// inactive. Stepping never mutates a grid, it returns the next generation,
/// and every generation shares the same precomputed [`Neighborhood`].
#[derive(Debug, Clone)]
pub struct Grid {
    neighborhood: Arc<Neighborhood>,
    active: HashSet<Coordinate>,
}

impl Grid {
    /// An all-inactive grid
    pub fn new(dimensions: usize) -> Result<Self, PatternError> {
        Ok(Self {
            neighborhood: Arc::new(Neighborhood::new(dimensions)?),
            active: HashSet::new(),
        })
    }

    /// A grid whose active cells are exactly `cells`.
    pub fn from_active<I>(dimensions: usize, cells: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut grid = Self::new(dimensions)?;
        for cell in cells {
            if cell.dimensions() != dimensions {
                return Err(PatternError::DimensionMismatch {
                    expected: dimensions,
                    found: cell.dimensions(),
                });
            }
            grid.active.insert(cell);
        }
        Ok(grid)
    }

    pub fn dimensions(&self) -> usize {
        self.neighborhood.dimensions()
    }

    pub fn is_active(&self, cell: &Coordinate) -> bool {
        self.active.contains(cell)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn active_cells(&self) -> impl Iterator<Item = &Coordinate> {
        self.active.iter()
    }

    /// Number of active cells among the neighbours of `cell`
    pub fn active_neighbors(&self, cell: &Coordinate) -> usize {
        self.neighborhood
            .neighbors(cell)
            .filter(|n| self.is_active(n))
            .count()
    }

    /// Active cells plus all their neighbours; no other cell can be active
    /// after the next step.
    pub fn candidates(&self) -> HashSet<Coordinate> {
        self.active
            .iter()
            .flat_map(|cell| self.with_neighbors(cell))
            .collect()
    }

    fn with_neighbors<'a>(&'a self, cell: &'a Coordinate) -> impl Iterator<Item = Coordinate> + 'a {
        iter::once(cell.clone()).chain(self.neighborhood.neighbors(cell))
    }

    fn survives(&self, cell: &Coordinate) -> bool {
        next_state(self.is_active(cell), self.active_neighbors(cell))
    }

    /// The next generation.
    ///
    /// Every candidate is judged against this grid only, so all cells update
    /// simultaneously.
    pub fn step(&self) -> Grid {
        let active = self
            .candidates()
            .into_iter()
            .filter(|cell| self.survives(cell))
            .collect();

        Grid {
            neighborhood: Arc::clone(&self.neighborhood),
            active,
        }
    }

    /// Same as [`Grid::step`], with candidates gathered and judged on the
    /// rayon pool.
    pub fn step_par(&self) -> Grid {
        let candidates: HashSet<Coordinate> = self
            .active
            .par_iter()
            .flat_map_iter(|cell| self.with_neighbors(cell))
            .collect();

        let active = candidates
            .into_par_iter()
            .filter(|cell| self.survives(cell))
            .collect();

        Grid {
            neighborhood: Arc::clone(&self.neighborhood),
            active,
        }
    }

    /// The grid after `generations` steps; `0` gives an equal grid back.
    pub fn run(&self, generations: usize) -> Grid {
        self.run_with(generations, Grid::step)
    }

    /// [`Grid::run`] using [`Grid::step_par`] for each generation.
    pub fn run_par(&self, generations: usize) -> Grid {
        self.run_with(generations, Grid::step_par)
    }

    fn run_with(&self, generations: usize, step: fn(&Grid) -> Grid) -> Grid {
        (1..=generations).fold(self.clone(), |grid, generation| {
            let next = step(&grid);
            debug!(
                dimensions = next.dimensions(),
                generation,
                active = next.active_count(),
                "advanced pocket dimension"
            );
            next
        })
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.active == other.active
    }
}

impl Eq for Grid {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cells<const D: usize>(coords: &[[i64; D]]) -> Vec<Coordinate> {
        coords.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_absent_cells_are_inactive() {
        let grid = Grid::from_active(3, cells(&[[0, 0, 0]])).unwrap();
        assert!(grid.is_active(&Coordinate::from([0, 0, 0])));
        assert!(!grid.is_active(&Coordinate::from([1_000_000, -7, 3])));
        assert_eq!(grid.active_neighbors(&Coordinate::from([1, 1, 1])), 1);
    }

    #[test]
    fn test_blinker_oscillates_in_two_dimensions() {
        let horizontal = Grid::from_active(2, cells(&[[0, 1], [1, 1], [2, 1]])).unwrap();
        let vertical = Grid::from_active(2, cells(&[[1, 0], [1, 1], [1, 2]])).unwrap();

        assert_eq!(horizontal.step(), vertical);
        assert_eq!(vertical.step(), horizontal);
        assert_eq!(horizontal.run(2), horizontal);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = Grid::from_active(2, cells(&[[0, 0], [0, 1], [1, 0], [1, 1]])).unwrap();
        assert_eq!(block.step(), block);
    }

    #[test]
    fn test_lone_cell_dies() {
        let lone = Grid::from_active(4, cells(&[[3, 3, 3, 3]])).unwrap();
        assert_eq!(lone.step().active_count(), 0);
        assert_eq!(lone.step().step().active_count(), 0);
    }

    #[test]
    fn test_candidates_cover_active_and_neighbors() {
        let grid = Grid::from_active(3, cells(&[[0, 0, 0], [5, 5, 5]])).unwrap();
        assert_eq!(grid.candidates().len(), 2 * 27);
    }

    #[test]
    fn test_step_does_not_mutate_and_is_repeatable() {
        let grid = Grid::from_active(3, cells(&[[1, 0, 0], [2, 1, 0], [0, 2, 0], [1, 2, 0], [2, 2, 0]]))
            .unwrap();
        let before = grid.clone();
        let first = grid.step();
        let second = grid.step();
        assert_eq!(grid, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_generations_is_identity() {
        let grid = Grid::from_active(4, cells(&[[1, 0, 0, 0], [0, 1, 0, 0]])).unwrap();
        assert_eq!(grid.run(0), grid);
        assert_eq!(grid.run_par(0), grid);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let err = Grid::from_active(3, cells(&[[0, 0]])).unwrap_err();
        assert_eq!(
            err,
            PatternError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(Grid::new(1).unwrap_err(), PatternError::TooFewDimensions(1));
    }

    #[test]
    fn test_grids_of_different_dimensions_differ() {
        assert_ne!(Grid::new(3).unwrap(), Grid::new(4).unwrap());
    }

    fn small_grid() -> impl Strategy<Value = Grid> {
        (2usize..=4).prop_flat_map(|dims| {
            prop::collection::hash_set(prop::collection::vec(-2i64..=2, dims), 0..12)
                .prop_map(move |cells| {
                    Grid::from_active(dims, cells.into_iter().map(Coordinate::from)).unwrap()
                })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_parallel_step_matches_sequential(grid in small_grid()) {
            prop_assert_eq!(grid.step_par(), grid.step());
            prop_assert_eq!(grid.run_par(2), grid.run(2));
        }

        #[test]
        fn prop_new_cells_stay_within_candidates(grid in small_grid()) {
            let candidates = grid.candidates();
            let next = grid.step();
            prop_assert!(next.active_cells().all(|cell| candidates.contains(cell)));
        }

        #[test]
        fn prop_active_cells_follow_the_rule(grid in small_grid()) {
            let next = grid.step();
            for cell in grid.candidates() {
                let n = grid.active_neighbors(&cell);
                let expected = if grid.is_active(&cell) { n == 2 || n == 3 } else { n == 3 };
                prop_assert_eq!(next.is_active(&cell), expected);
            }
        }
    }
}
