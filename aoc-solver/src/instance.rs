//! Parsed puzzle state behind a type-erased, timed interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval around one parse or solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `work`, stamping the clock on both sides. Failures carry no timing.
    fn measure<T, E>(work: impl FnOnce() -> Result<T, E>) -> Result<(T, Timing), E> {
        let start = Utc::now();
        let value = work()?;
        Ok((
            value,
            Timing {
                start,
                end: Utc::now(),
            },
        ))
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer for one part and how long computing it took
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// Parsed state for one year-day puzzle, ready to solve any of its parts.
///
/// Parsing happens once in [`SolverInstance::new`]; every part then works on
/// the same shared data, so a part may leave state behind for later ones.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Timing::measure(|| S::parse(input))?;
        Ok(Self {
            year,
            day,
            shared,
            parsed,
        })
    }
}

/// Type-erased interface over any [`SolverInstance`].
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} (took {:?})", part, result.answer, result.duration());
///     }
///     println!("Parse took {:?}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the computation. Parts outside `1..=parts()`
    /// fail with [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        Timing::measure(|| S::solve_part_checked_range(shared, part))
            .map(|(answer, timing)| SolveResult { answer, timing })
    }

    fn parse_timing(&self) -> Timing {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AocParser;

    /// Borrows the input; part 2 reports how many times part 1 ran
    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = (Vec<&'a str>, u32);

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.trim().is_empty() {
                return Err(ParseError::InvalidFormat("no words".to_string()));
            }
            Ok((input.split_whitespace().collect(), 0))
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            let (words, runs) = shared;
            match part {
                1 => {
                    *runs += 1;
                    Ok(words.len().to_string())
                }
                _ => Ok(runs.to_string()),
            }
        }
    }

    #[test]
    fn test_parts_share_parsed_state() {
        let input = String::from("alpha beta gamma");
        let mut solver: Box<dyn DynSolver + '_> =
            Box::new(SolverInstance::<Words>::new(2020, 7, &input).unwrap());

        assert_eq!((solver.year(), solver.day(), solver.parts()), (2020, 7, 2));
        assert_eq!(solver.solve(1).unwrap().answer, "3");
        assert_eq!(solver.solve(1).unwrap().answer, "3");
        assert_eq!(solver.solve(2).unwrap().answer, "2");
    }

    #[test]
    fn test_timings_are_ordered() {
        let mut solver = SolverInstance::<Words>::new(2020, 7, "a b").unwrap();
        let parsed = solver.parse_timing();
        assert!(parsed.start <= parsed.end);
        assert_eq!(solver.parse_duration(), parsed.duration());

        let solved = solver.solve(1).unwrap();
        assert!(solved.timing.start >= parsed.end);
        assert!(solved.duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_out_of_range_part_and_parse_failure() {
        let mut solver = SolverInstance::<Words>::new(2020, 7, "a").unwrap();
        assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
        assert!(matches!(
            SolverInstance::<Words>::new(2020, 7, "  \n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
