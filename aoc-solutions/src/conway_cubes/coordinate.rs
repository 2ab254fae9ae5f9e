use itertools::Itertools;

use super::error::PatternError;

/// A cell position in a lattice of any dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate(Box<[i64]>);

impl Coordinate {
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    pub fn components(&self) -> &[i64] {
        &self.0
    }

    /// Component-wise sum with `offset`, which must have the same length.
    pub fn translate(&self, offset: &[i64]) -> Coordinate {
        debug_assert_eq!(self.0.len(), offset.len());
        Coordinate(self.0.iter().zip(offset).map(|(c, d)| c + d).collect())
    }
}

impl From<Vec<i64>> for Coordinate {
    fn from(components: Vec<i64>) -> Self {
        Coordinate(components.into_boxed_slice())
    }
}

impl<const D: usize> From<[i64; D]> for Coordinate {
    fn from(components: [i64; D]) -> Self {
        Coordinate(Box::new(components))
    }
}

/// The `3^D - 1` offsets reaching every cell that differs from the centre by
/// at most 1 in each component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    dimensions: usize,
    offsets: Vec<Box<[i64]>>,
}

impl Neighborhood {
    pub fn new(dimensions: usize) -> Result<Self, PatternError> {
        if dimensions < 2 {
            return Err(PatternError::TooFewDimensions(dimensions));
        }

        let offsets = std::iter::repeat_n(-1i64..=1, dimensions)
            .multi_cartesian_product()
            .filter(|offset| offset.iter().any(|&d| d != 0))
            .map(Vec::into_boxed_slice)
            .collect();

        Ok(Self {
            dimensions,
            offsets,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of neighbours every cell has
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offsets(&self) -> impl Iterator<Item = &[i64]> {
        self.offsets.iter().map(|offset| &**offset)
    }

    /// Every neighbour of `center`, never `center` itself
    pub fn neighbors<'a>(&'a self, center: &'a Coordinate) -> impl Iterator<Item = Coordinate> + 'a {
        self.offsets().map(move |offset| center.translate(offset))
    }
}
