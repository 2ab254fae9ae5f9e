//! Property-based tests for part range checking and part dispatch

use aoc_solver::{AocParser, ParseError, PartSolver, RegistryBuilder, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver whose part count is a const parameter
struct Counting<const N: u8>;

impl<const N: u8> AocParser for Counting<N> {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|w| w.parse().map_err(|_| ParseError::InvalidFormat(w.to_string())))
            .collect()
    }
}

impl<const N: u8> PartSolver<1> for Counting<N> {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u32>().to_string())
    }
}

impl<const N: u8> PartSolver<2> for Counting<N> {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().copied().max().unwrap_or_default().to_string())
    }
}

impl<const N: u8> Solver for Counting<N> {
    const PARTS: u8 = N;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Ok(format!("part{}", part)),
        }
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    let mut shared = vec![1, 2, 3];
    match max_parts {
        1 => Counting::<1>::solve_part_checked_range(&mut shared, part),
        2 => Counting::<2>::solve_part_checked_range(&mut shared, part),
        _ => Counting::<3>::solve_part_checked_range(&mut shared, part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts above PARTS are rejected with the requested number
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "Expected Ok for part {} with max {}", part, max_parts);
        }
    }

    /// In-range parts give the same answer as calling the part solver directly
    #[test]
    fn prop_dispatch_matches_part_solver(
        numbers in prop::collection::vec(0u32..1000, 1..10),
        part in 1u8..=2,
    ) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
        let mut shared1 = Counting::<2>::parse(&input).unwrap();
        let mut shared2 = Counting::<2>::parse(&input).unwrap();

        let dispatched = Counting::<2>::solve_part_checked_range(&mut shared1, part).unwrap();
        let direct = match part {
            1 => <Counting<2> as PartSolver<1>>::solve(&mut shared2),
            _ => <Counting<2> as PartSolver<2>>::solve(&mut shared2),
        }
        .unwrap();

        prop_assert_eq!(dispatched, direct);
    }
}

#[test]
fn test_dyn_solver_checks_range() {
    let registry = RegistryBuilder::new()
        .register_solver::<Counting<2>>(2020, 1, &[])
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2020, 1, "4 5 6").unwrap();

    assert_eq!(solver.solve(1).unwrap().answer, "15");
    assert_eq!(solver.solve(2).unwrap().answer, "6");
    assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_parse_error_surfaces() {
    let registry = RegistryBuilder::new()
        .register_solver::<Counting<2>>(2020, 1, &[])
        .unwrap()
        .build();

    assert!(registry.create_solver(2020, 1, "4 five").is_err());
}
