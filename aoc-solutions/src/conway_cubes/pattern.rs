use std::str::FromStr;

use super::coordinate::Coordinate;
use super::error::PatternError;
use super::grid::Grid;

/// A validated 2-D starting slice of `#` (active) and `.` (inactive) cells.
///
/// Parsing is independent of the dimension count, so one pattern can seed
/// grids of several dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    /// Parse newline-separated rows.
    ///
    /// Blank leading and trailing lines and whitespace around each row are
    /// ignored. A blank line between rows counts as a row of width 0.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let start = lines.iter().position(|l| !l.is_empty());
        let end = lines.iter().rposition(|l| !l.is_empty());

        match (start, end) {
            (Some(start), Some(end)) => Self::from_lines(lines[start..=end].iter().copied()),
            _ => Err(PatternError::Empty),
        }
    }

    /// Build from one row per item, first item being `y = 0`.
    pub fn from_lines<'r, I>(lines: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = &'r str>,
    {
        let mut width = None;
        let mut rows = Vec::new();

        for (y, line) in lines.into_iter().enumerate() {
            let row = line
                .trim()
                .chars()
                .enumerate()
                .map(|(x, c)| match c {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    found => Err(PatternError::UnexpectedChar {
                        row: y + 1,
                        column: x + 1,
                        found,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(PatternError::RaggedRow {
                    row: y + 1,
                    expected,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        match width {
            Some(width) if width > 0 => Ok(Self { width, rows }),
            _ => Err(PatternError::Empty),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn active_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&on| on).count()
    }

    /// Active cells as `(x, y)` with `x` the column and `y` the row
    pub fn active_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &on)| on)
                .map(move |(x, _)| (x, y))
        })
    }

    /// Seed a grid of `dimensions` dimensions, placing the pattern at
    /// `(x, y, 0, .., 0)`.
    pub fn embed(&self, dimensions: usize) -> Result<Grid, PatternError> {
        if dimensions < 2 {
            return Err(PatternError::TooFewDimensions(dimensions));
        }
        let cells = self.active_positions().map(|(x, y)| {
            let mut components = vec![0i64; dimensions];
            components[0] = x as i64;
            components[1] = y as i64;
            Coordinate::from(components)
        });
        Grid::from_active(dimensions, cells)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const GLIDER: &str = indoc! {"
        .#.
        ..#
        ###
    "};

    #[test]
    fn test_parse_glider() {
        let pattern: Pattern = GLIDER.parse().unwrap();
        assert_eq!(pattern.width(), 3);
        assert_eq!(pattern.height(), 3);
        assert_eq!(pattern.active_count(), 5);
        assert_eq!(
            pattern.active_positions().collect::<Vec<_>>(),
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_surrounding_blank_lines_and_whitespace_ignored() {
        let padded = Pattern::parse("\n\n   .#.\n ..#  \n###\n\n").unwrap();
        assert_eq!(padded, Pattern::parse(GLIDER).unwrap());
    }

    #[test]
    fn test_embed_places_pattern_at_origin_plane() {
        let grid = Pattern::parse(GLIDER).unwrap().embed(4).unwrap();
        assert_eq!(grid.dimensions(), 4);
        assert_eq!(grid.active_count(), 5);
        assert!(grid.is_active(&Coordinate::from([1, 0, 0, 0])));
        assert!(grid.is_active(&Coordinate::from([2, 1, 0, 0])));
        assert!(!grid.is_active(&Coordinate::from([0, 0, 0, 0])));
        assert!(!grid.is_active(&Coordinate::from([1, 0, 1, 0])));
    }

    #[test]
    fn test_unexpected_char_reports_position() {
        assert_eq!(
            Pattern::parse(".#.\n.x#\n###"),
            Err(PatternError::UnexpectedChar {
                row: 2,
                column: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert_eq!(
            Pattern::parse(".#.\n..\n###"),
            Err(PatternError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Pattern::parse(".#.\n\n###"),
            Err(PatternError::RaggedRow {
                row: 2,
                expected: 3,
                found: 0
            })
        );
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(Pattern::parse("  \n\n "), Err(PatternError::Empty));
        assert_eq!(Pattern::from_lines(Vec::<&str>::new()), Err(PatternError::Empty));
    }

    #[test]
    fn test_all_inactive_pattern_is_valid() {
        let grid = Pattern::parse("...\n...").unwrap().embed(3).unwrap();
        assert_eq!(grid.active_count(), 0);
        assert_eq!(grid.run(3).active_count(), 0);
    }

    #[test]
    fn test_embed_needs_two_dimensions() {
        let pattern = Pattern::parse(GLIDER).unwrap();
        assert_eq!(pattern.embed(1).unwrap_err(), PatternError::TooFewDimensions(1));
        assert_eq!(pattern.embed(2).unwrap().active_count(), 5);
    }

    #[test]
    fn test_glider_generations_in_three_dimensions() {
        let grid = Pattern::parse(GLIDER).unwrap().embed(3).unwrap();
        assert_eq!(grid.run(1).active_count(), 11);
        assert_eq!(grid.run(2).active_count(), 21);
        assert_eq!(grid.run(3).active_count(), 38);
        assert_eq!(grid.run(6).active_count(), 112);
    }

    #[test]
    fn test_glider_generations_in_four_dimensions() {
        let grid = Pattern::parse(GLIDER).unwrap().embed(4).unwrap();
        assert_eq!(grid.run(1).active_count(), 29);
        assert_eq!(grid.run_par(6).active_count(), 848);
    }

    #[test]
    fn test_first_generation_layers() {
        let next = Pattern::parse(GLIDER).unwrap().embed(3).unwrap().step();
        let layer = |z: i64| {
            next.active_cells()
                .filter(|c| c.components()[2] == z)
                .count()
        };
        assert_eq!(layer(-1), 3);
        assert_eq!(layer(0), 5);
        assert_eq!(layer(1), 3);
    }
}
