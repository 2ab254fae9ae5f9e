use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

use crate::conway_cubes::Pattern;

/// Conway Cubes
pub struct Day17;

const BOOT_CYCLES: usize = 6;

impl AocParser for Day17 {
    type SharedData<'a> = Pattern;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Pattern::parse(input)
            .context("invalid starting slice")
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Day17 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = shared.embed(3).map_err(SolveError::failed)?;
        Ok(grid.run(BOOT_CYCLES).active_count().to_string())
    }
}

impl PartSolver<2> for Day17 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = shared.embed(4).map_err(SolveError::failed)?;
        Ok(grid.run_par(BOOT_CYCLES).active_count().to_string())
    }
}

impl Solver for Day17 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
