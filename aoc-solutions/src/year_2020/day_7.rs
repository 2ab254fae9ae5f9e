use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

use crate::haversack::{BagGraph, count_total_contained, find_all_containers};

/// Handy Haversacks
pub struct Day7;

const TARGET: &str = "shiny gold";

impl AocParser for Day7 {
    type SharedData<'a> = BagGraph;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        BagGraph::parse(input)
            .context("invalid bag rules")
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Day7 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_all_containers(shared, TARGET)
            .map(|holders| holders.len().to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Day7 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        count_total_contained(shared, TARGET)
            .map(|total| total.to_string())
            .map_err(SolveError::failed)
    }
}

impl Solver for Day7 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
