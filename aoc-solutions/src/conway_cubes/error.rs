use thiserror::Error;

/// Errors from reading a starting pattern or building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern has no rows")]
    Empty,
    /// Rows and columns are 1-based
    #[error("row {row}, column {column}: unexpected {found:?}, expected '#' or '.'")]
    UnexpectedChar {
        row: usize,
        column: usize,
        found: char,
    },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("at least 2 dimensions are required, got {0}")]
    TooFewDimensions(usize),
    #[error("coordinate has {found} components, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}
